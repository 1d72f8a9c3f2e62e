// timeline.rs - Women's median weekly earnings as a percent of men's
//
// The bundled series covers 1979-2023. Hosts with fresher numbers load
// their own `year,ratio` CSV through `read_timeline`.

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub year: u16,
    /// Percent, e.g. 81.5
    pub ratio: f32,
}

const fn t(year: u16, ratio: f32) -> TimelinePoint {
    TimelinePoint { year, ratio }
}

pub static TIMELINE: [TimelinePoint; 45] = [
    t(1979, 62.3), t(1980, 64.2), t(1981, 64.4), t(1982, 65.7), t(1983, 66.5),
    t(1984, 67.6), t(1985, 68.1), t(1986, 69.2), t(1987, 69.8), t(1988, 70.2),
    t(1989, 70.1), t(1990, 71.9), t(1991, 74.2), t(1992, 75.8), t(1993, 77.1),
    t(1994, 76.4), t(1995, 75.5), t(1996, 75.0), t(1997, 74.4), t(1998, 76.3),
    t(1999, 76.5), t(2000, 76.9), t(2001, 76.4), t(2002, 77.9), t(2003, 79.4),
    t(2004, 80.4), t(2005, 81.0), t(2006, 80.8), t(2007, 80.2), t(2008, 79.9),
    t(2009, 80.2), t(2010, 81.2), t(2011, 82.2), t(2012, 80.9), t(2013, 82.1),
    t(2014, 82.5), t(2015, 81.1), t(2016, 81.9), t(2017, 81.8), t(2018, 81.1),
    t(2019, 81.5), t(2020, 82.3), t(2021, 83.1), t(2022, 83.0), t(2023, 83.6),
];

/// Read a `year,ratio` CSV with a header row
pub fn read_timeline<R: Read>(rdr: R) -> Result<Vec<TimelinePoint>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut out = Vec::new();
    for row in rdr.deserialize() {
        out.push(row?);
    }
    out.sort_by_key(|p: &TimelinePoint| p.year);
    Ok(out)
}

pub fn point_for_year(data: &[TimelinePoint], year: u16) -> Option<TimelinePoint> {
    data.iter().find(|p| p.year == year).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_csv_sorted() {
        let src = "year,ratio\n2001, 76.4\n1999,76.5\n";
        let pts = read_timeline(src.as_bytes()).unwrap();
        assert_eq!(pts, vec![t(1999, 76.5), t(2001, 76.4)]);
    }

    #[test]
    fn malformed_ratio_is_an_error() {
        let src = "year,ratio\n2001,abc\n";
        assert!(read_timeline(src.as_bytes()).is_err());
    }

    #[test]
    fn bundled_series_is_contiguous() {
        for w in TIMELINE.windows(2) {
            assert_eq!(w[1].year, w[0].year + 1);
        }
        assert!(point_for_year(&TIMELINE, 2000).is_some());
    }
}
