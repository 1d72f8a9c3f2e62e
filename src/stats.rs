// stats.rs - Derived summaries over census-style records
//
// Groups keep first-appearance order so chart categories line up with
// the source file. Rates with an empty denominator are 0, never NaN.

use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::debug;

use crate::data::{PayRatio, find_group};
use crate::error::{Error, Result};

pub const MALE: &str = "Male";
pub const FEMALE: &str = "Female";
const HIGH_INCOME: &str = ">50K";
const WORKING_AGE: u32 = 18;

/// One CSV row as it arrives; any column may be absent or blank
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub income: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub age: u32,
    pub race: String,
    pub gender: String,
    pub high_income: bool,
}

impl Record {
    pub fn new(race: &str, gender: &str, high_income: bool, age: u32) -> Self {
        Self { age, race: race.into(), gender: gender.into(), high_income }
    }

    /// Years since working age, floored at zero
    pub fn experience(&self) -> u32 {
        self.age.saturating_sub(WORKING_AGE)
    }
}

fn required(v: Option<String>, name: &'static str) -> Result<String> {
    match v {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(Error::MissingField(name)),
    }
}

impl TryFrom<RawRecord> for Record {
    type Error = Error;

    fn try_from(raw: RawRecord) -> Result<Self> {
        let race = required(raw.race, "race")?;
        let gender = required(raw.gender, "gender")?;
        let income = required(raw.income, "income")?;
        let age = required(raw.age, "age")?;
        let age = age.parse::<u32>().map_err(|_| Error::InvalidAge(age))?;
        // Test splits of the census file end labels with a period.
        let high_income = income.trim_end_matches('.') == HIGH_INCOME;
        Ok(Record { age, race, gender, high_income })
    }
}

/// Read records from CSV, dropping rows with missing or malformed fields
pub fn read_records<R: Read>(rdr: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr);

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (line, row) in rdr.deserialize::<RawRecord>().enumerate() {
        match row.map_err(Error::from).and_then(Record::try_from) {
            Ok(r) => out.push(r),
            Err(e) => {
                skipped += 1;
                debug!(line = line + 2, error = %e, "skipping record");
            }
        }
    }
    debug!(kept = out.len(), skipped, "read census records");
    Ok(out)
}

/// Numerator/denominator pair
#[derive(Clone, Copy, Debug, Default)]
struct Tally {
    hits: u32,
    total: u32,
}

impl Tally {
    fn add(&mut self, hit: bool) {
        self.total += 1;
        if hit {
            self.hits += 1;
        }
    }

    fn rate(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.hits as f64 / self.total as f64
        }
    }
}

fn slot<'a, K: PartialEq, V: Default>(groups: &'a mut Vec<(K, V)>, key: K) -> &'a mut V {
    let idx = match groups.iter().position(|(k, _)| *k == key) {
        Some(i) => i,
        None => {
            groups.push((key, V::default()));
            groups.len() - 1
        }
    };
    &mut groups[idx].1
}

/// Share of each gender above the income threshold, per race
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RaceRate {
    pub race: String,
    #[serde(rename = "Male")]
    pub male: f64,
    #[serde(rename = "Female")]
    pub female: f64,
    pub count: u32,
}

impl RaceRate {
    pub fn rate(&self, gender: &str) -> f64 {
        match gender {
            MALE => self.male,
            FEMALE => self.female,
            _ => 0.0,
        }
    }
}

#[derive(Default)]
struct RaceAcc {
    male: Tally,
    female: Tally,
    count: u32,
}

pub fn race_rates(records: &[Record]) -> Vec<RaceRate> {
    let mut groups: Vec<(&str, RaceAcc)> = Vec::new();
    for r in records {
        let acc = slot(&mut groups, r.race.as_str());
        acc.count += 1;
        match r.gender.as_str() {
            MALE => acc.male.add(r.high_income),
            FEMALE => acc.female.add(r.high_income),
            _ => {}
        }
    }

    groups
        .into_iter()
        .map(|(race, acc)| RaceRate {
            race: race.to_string(),
            male: acc.male.rate(),
            female: acc.female.rate(),
            count: acc.count,
        })
        .collect()
}

/// Income share and mean experience for one (race, gender) cell
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExperiencePoint {
    pub race: String,
    pub gender: String,
    pub proportion: f64,
    pub experience: f64,
    pub count: u32,
}

#[derive(Default)]
struct ExpAcc {
    income: Tally,
    years: u64,
}

pub fn experience_points(records: &[Record]) -> Vec<ExperiencePoint> {
    let mut races: Vec<(&str, Vec<(&str, ExpAcc)>)> = Vec::new();
    for r in records {
        let genders = slot(&mut races, r.race.as_str());
        let acc = slot(genders, r.gender.as_str());
        acc.income.add(r.high_income);
        acc.years += r.experience() as u64;
    }

    races
        .into_iter()
        .flat_map(|(race, genders)| {
            genders.into_iter().map(move |(gender, acc)| ExperiencePoint {
                race: race.to_string(),
                gender: gender.to_string(),
                proportion: acc.income.rate(),
                experience: if acc.income.total == 0 {
                    0.0
                } else {
                    acc.years as f64 / acc.income.total as f64
                },
                count: acc.income.total,
            })
        })
        .collect()
}

/// Everything the page derives from the census file
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub records: usize,
    pub race_rates: Vec<RaceRate>,
    pub experience: Vec<ExperiencePoint>,
}

pub fn summarize(records: &[Record]) -> Summary {
    Summary {
        records: records.len(),
        race_rates: race_rates(records),
        experience: experience_points(records),
    }
}

/// Headline figures comparing the best- and worst-paid groups
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Headline {
    pub gap: String,
    pub annual: String,
    pub ratio: String,
}

pub fn headline(data: &[PayRatio], top: &str, bottom: &str) -> Option<Headline> {
    let hi = find_group(data, top)?;
    let lo = find_group(data, bottom)?;
    let diff = hi.annual_salary as f64 - lo.annual_salary as f64;
    Some(Headline {
        gap: format!("{}%", lo.pay_gap),
        annual: format!("${}K", (diff / 1000.0).round() as i64),
        ratio: format!("${:.2}", lo.ratio),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PAY_RATIOS;
    use approx::assert_relative_eq;

    fn rec(race: &str, gender: &str, high: bool, age: u32) -> Record {
        Record::new(race, gender, high, age)
    }

    #[test]
    fn rates_per_gender() {
        let rs = vec![
            rec("A", MALE, true, 30),
            rec("A", MALE, false, 30),
            rec("A", FEMALE, true, 30),
        ];
        let out = race_rates(&rs);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].race, "A");
        assert_relative_eq!(out[0].male, 0.5);
        assert_relative_eq!(out[0].female, 1.0);
        assert_eq!(out[0].count, 3);
    }

    #[test]
    fn missing_gender_rate_is_zero() {
        let rs = vec![rec("B", MALE, true, 40), rec("B", MALE, true, 40)];
        let out = race_rates(&rs);
        assert_eq!(out[0].female, 0.0);
        assert!(!out[0].female.is_nan());
        assert_eq!(out[0].rate("Other"), 0.0);
    }

    #[test]
    fn races_keep_first_appearance_order() {
        let rs = vec![
            rec("White", MALE, false, 20),
            rec("Black", FEMALE, false, 20),
            rec("White", FEMALE, true, 20),
            rec("Asian-Pac-Islander", MALE, true, 20),
        ];
        let names: Vec<_> = race_rates(&rs).into_iter().map(|r| r.race).collect();
        assert_eq!(names, ["White", "Black", "Asian-Pac-Islander"]);
    }

    #[test]
    fn experience_floors_at_zero() {
        let rs = vec![
            rec("A", MALE, true, 17),
            rec("A", MALE, false, 28),
            rec("A", FEMALE, false, 38),
        ];
        let pts = experience_points(&rs);
        assert_eq!(pts.len(), 2);
        assert_eq!((pts[0].race.as_str(), pts[0].gender.as_str()), ("A", MALE));
        assert_relative_eq!(pts[0].experience, 5.0);
        assert_relative_eq!(pts[0].proportion, 0.5);
        assert_eq!(pts[0].count, 2);
        assert_relative_eq!(pts[1].experience, 20.0);
        assert_relative_eq!(pts[1].proportion, 0.0);
    }

    #[test]
    fn csv_rows_with_gaps_are_dropped() {
        let src = "\
age,workclass,race,gender,income
39, State-gov, White, Male, <=50K
50,,White,Female,>50K.
,Private,Black,Female,>50K
abc,Private,Black,Female,>50K
28,Private,Black,,>50K
";
        let rs = read_records(src.as_bytes()).unwrap();
        assert_eq!(rs, vec![rec("White", MALE, false, 39), rec("White", FEMALE, true, 50)]);
    }

    #[test]
    fn raw_record_reports_first_missing_field() {
        let raw = RawRecord { age: Some("30".into()), race: Some(" ".into()), ..Default::default() };
        assert!(matches!(Record::try_from(raw), Err(Error::MissingField("race"))));
    }

    #[test]
    fn headline_black_women_vs_white_men() {
        let h = headline(&PAY_RATIOS, "White Men", "Black Women").unwrap();
        assert_eq!(h.gap, "35%");
        assert_eq!(h.annual, "$21K");
        assert_eq!(h.ratio, "$0.65");
        assert!(headline(&PAY_RATIOS, "White Men", "Nobody").is_none());
    }
}
