// curve.rs - Smooth SVG paths through sampled points
//
// Both curves emit one cubic Bezier per segment and pass through every
// input point. `first` is the command for the opening point: 'M' starts
// a new subpath, 'L' joins onto the previous one (the second edge of an
// area).

/// (x, y) in pixel space
pub type Pt = (f32, f32);

/// Centripetal parameterization
const ALPHA: f32 = 0.5;
const EPS: f32 = 1e-6;

/// Catmull-Rom spline through `pts`, converted to cubic Beziers
pub fn catmull_rom(pts: &[Pt], first: char) -> String {
    let mut d = String::new();
    let Some(&start) = pts.first() else {
        return d;
    };
    push_point(&mut d, first, start);
    if pts.len() == 2 {
        push_point(&mut d, 'L', pts[1]);
        return d;
    }

    for i in 0..pts.len().saturating_sub(1) {
        let (p1, p2) = (pts[i], pts[i + 1]);
        let l12 = dist(p1, p2).powf(ALPHA);
        let mut c1 = p1;
        let mut c2 = p2;

        if let Some(&p0) = i.checked_sub(1).and_then(|j| pts.get(j)) {
            let l01 = dist(p0, p1).powf(ALPHA);
            if l01 > EPS {
                let a = 2.0 * l01 * l01 + 3.0 * l01 * l12 + l12 * l12;
                let n = 3.0 * l01 * (l01 + l12);
                c1 = (
                    (p1.0 * a - p0.0 * l12 * l12 + p2.0 * l01 * l01) / n,
                    (p1.1 * a - p0.1 * l12 * l12 + p2.1 * l01 * l01) / n,
                );
            }
        }
        if let Some(&p3) = pts.get(i + 2) {
            let l23 = dist(p2, p3).powf(ALPHA);
            if l23 > EPS {
                let b = 2.0 * l23 * l23 + 3.0 * l23 * l12 + l12 * l12;
                let m = 3.0 * l23 * (l23 + l12);
                c2 = (
                    (p2.0 * b + p1.0 * l23 * l23 - p3.0 * l12 * l12) / m,
                    (p2.1 * b + p1.1 * l23 * l23 - p3.1 * l12 * l12) / m,
                );
            }
        }
        push_cubic(&mut d, c1, c2, p2);
    }
    d
}

/// Cubic through `pts` that never overshoots in y between neighbours.
/// Points must be sorted by x.
pub fn monotone_x(pts: &[Pt], first: char) -> String {
    let mut d = String::new();
    let Some(&start) = pts.first() else {
        return d;
    };
    push_point(&mut d, first, start);
    let n = pts.len();
    if n == 2 {
        push_point(&mut d, 'L', pts[1]);
        return d;
    }
    if n < 3 {
        return d;
    }

    let mut t = vec![0.0; n];
    for i in 1..n - 1 {
        t[i] = slope3(pts[i - 1], pts[i], pts[i + 1]);
    }
    t[0] = slope2(pts[0], pts[1], t[1]);
    t[n - 1] = slope2(pts[n - 2], pts[n - 1], t[n - 2]);

    for i in 0..n - 1 {
        let (p0, p1) = (pts[i], pts[i + 1]);
        let dx = (p1.0 - p0.0) / 3.0;
        push_cubic(&mut d, (p0.0 + dx, p0.1 + dx * t[i]), (p1.0 - dx, p1.1 - dx * t[i + 1]), p1);
    }
    d
}

// Tangent at p1, clamped to zero at local extrema
fn slope3(p0: Pt, p1: Pt, p2: Pt) -> f32 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = if h0 != 0.0 { (p1.1 - p0.1) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (p2.1 - p1.1) / h1 } else { 0.0 };
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_nan() { 0.0 } else { t }
}

// End tangent from the segment slope and the inner tangent
fn slope2(p0: Pt, p1: Pt, t: f32) -> f32 {
    let h = p1.0 - p0.0;
    if h != 0.0 { (3.0 * (p1.1 - p0.1) / h - t) / 2.0 } else { t }
}

fn sign(v: f32) -> f32 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

fn dist(a: Pt, b: Pt) -> f32 {
    (b.0 - a.0).hypot(b.1 - a.1)
}

fn push_point(d: &mut String, cmd: char, (x, y): Pt) {
    d.push_str(&format!("{cmd}{x:.2},{y:.2}"));
}

fn push_cubic(d: &mut String, c1: Pt, c2: Pt, p: Pt) {
    d.push_str(&format!("C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}", c1.0, c1.1, c2.0, c2.1, p.0, p.1));
}
