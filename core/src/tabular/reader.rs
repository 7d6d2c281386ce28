use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, ensure};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use screener_common::company::{CompanyRecord, EmployeeLocations, GrowthRates};
use screener_common::source::{
    self, CompanySource, RecordError, RecordErrorKind, SourceRow,
};

const REQUIRED_COLUMNS: [&str; 10] = [
    source::COMPANY_NAME,
    source::FOUNDED_YEAR,
    source::TOTAL_EMPLOYEES,
    source::HEADQUARTERS,
    source::INDUSTRY,
    source::DESCRIPTION,
    source::EMPLOYEE_LOCATIONS,
    source::GROWTH_2Y,
    source::GROWTH_1Y,
    source::GROWTH_6M,
];

/// Reads companies from a headered CSV file.
pub struct CsvCompanySource {
    path: PathBuf,
}

impl CsvCompanySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CompanySource for CsvCompanySource {
    fn load(&self) -> anyhow::Result<Vec<SourceRow>> {
        let file = File::open(&self.path)
            .with_context(|| format!("failed to open company data at {}", self.path.display()))?;
        read_rows(file).with_context(|| format!("failed to read {}", self.path.display()))
    }
}

/// Parses every data row, keeping bad rows as [`RecordError`]s in place.
///
/// Fails as a whole only when the header row is unreadable or lacks a
/// required column.
pub fn read_rows<R: io::Read>(input: R) -> anyhow::Result<Vec<SourceRow>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    let headers = reader.headers().context("failed to read the header row")?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .collect();
    ensure!(missing.is_empty(), "missing required columns: {}", missing.join(", "));

    let rows = reader
        .deserialize::<RawRow>()
        .enumerate()
        .map(|(idx, row)| {
            row.map_err(|err| RecordErrorKind::Unreadable(err.to_string()))
                .and_then(RawRow::into_record)
                .map_err(|kind| RecordError { row: idx + 1, kind })
        })
        .collect();

    Ok(rows)
}

/// A row exactly as it appears in the file, before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Company Name")]
    name: Option<String>,
    #[serde(rename = "Founded Year")]
    founded_year: Option<String>,
    #[serde(rename = "Total Employees")]
    total_employees: Option<String>,
    #[serde(rename = "Headquarters")]
    headquarters: Option<String>,
    #[serde(rename = "Industry")]
    industry: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "Employee Locations")]
    employee_locations: Option<String>,
    #[serde(rename = "Employee Growth 2Y (%)")]
    growth_2y: Option<String>,
    #[serde(rename = "Employee Growth 1Y (%)")]
    growth_1y: Option<String>,
    #[serde(rename = "Employee Growth 6M (%)")]
    growth_6m: Option<String>,
}

impl RawRow {
    fn into_record(self) -> Result<CompanyRecord, RecordErrorKind> {
        let founded_year = parse_integer(source::FOUNDED_YEAR, required(source::FOUNDED_YEAR, self.founded_year)?)?;
        let total_employees = parse_integer(source::TOTAL_EMPLOYEES, required(source::TOTAL_EMPLOYEES, self.total_employees)?)?;

        Ok(CompanyRecord {
            name: required(source::COMPANY_NAME, self.name)?,
            industry: required(source::INDUSTRY, self.industry)?,
            description: required(source::DESCRIPTION, self.description)?,
            founded_year,
            total_employees,
            headquarters: required(source::HEADQUARTERS, self.headquarters)?,
            employee_locations: EmployeeLocations::new(self.employee_locations.unwrap_or_default()),
            growth: GrowthRates::new(
                optional_rate(source::GROWTH_2Y, self.growth_2y)?,
                parse_rate(source::GROWTH_1Y, required(source::GROWTH_1Y, self.growth_1y)?)?,
                parse_rate(source::GROWTH_6M, required(source::GROWTH_6M, self.growth_6m)?)?,
            ),
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, RecordErrorKind> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(RecordErrorKind::MissingField(field))
}

/// Accepts integral float text such as `2021.0`, which spreadsheet exports produce.
fn parse_integer<T: TryFrom<i64>>(field: &'static str, value: String) -> Result<T, RecordErrorKind> {
    let invalid = || RecordErrorKind::InvalidNumber { field, value: value.clone() };

    let integer: i64 = match value.parse::<i64>() {
        Ok(integer) => integer,
        Err(_) => {
            let float: f64 = value.parse().map_err(|_| invalid())?;
            if !float.is_finite() || float.fract() != 0.0 {
                return Err(invalid());
            }
            float as i64
        }
    };

    T::try_from(integer).map_err(|_| invalid())
}

fn parse_rate(field: &'static str, value: String) -> Result<f64, RecordErrorKind> {
    value
        .parse::<f64>()
        .map_err(|_| RecordErrorKind::InvalidNumber { field, value })
}

/// A blank or `NaN` 2-year rate means the company is too young to have one.
fn optional_rate(field: &'static str, value: Option<String>) -> Result<Option<f64>, RecordErrorKind> {
    match value.filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => parse_rate(field, value).map(|rate| Some(rate).filter(|rate| !rate.is_nan())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Company Name,Founded Year,Total Employees,Headquarters,Industry,Description,Employee Locations,Employee Growth 2Y (%),Employee Growth 1Y (%),Employee Growth 6M (%)";

    fn csv(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn parses_a_complete_row() {
        let input = csv(&[
            r#"Quotient,2021,34,"Austin, USA",Fintech,"Billing for agencies","{'USA': 30, 'UK': 4}",48.5,22,9.5"#,
        ]);
        let rows = read_rows(input.as_bytes()).unwrap();
        let record = rows.into_iter().next().unwrap().unwrap();

        assert_eq!(record.name, "Quotient");
        assert_eq!(record.founded_year, 2021);
        assert_eq!(record.total_employees, 34);
        assert_eq!(record.headquarters, "Austin, USA");
        assert_eq!(record.employee_locations.raw(), "{'USA': 30, 'UK': 4}");
        assert_eq!(record.growth, GrowthRates::new(Some(48.5), 22.0, 9.5));
    }

    #[test]
    fn blank_or_nan_two_year_growth_is_absent() {
        let input = csv(&[
            r#"Young,2024,21,"Ottawa, Canada",SaaS,Forms,"{'Canada': 21}",,30,12"#,
            r#"Younger,2024.0,21.0,"Ottawa, Canada",SaaS,Forms,"{'Canada': 21}",NaN,30,12"#,
        ]);
        let rows = read_rows(input.as_bytes()).unwrap();

        for row in rows {
            let record = row.unwrap();
            assert_eq!(record.growth.two_year, None);
            assert_eq!(record.founded_year, 2024);
        }
    }

    #[test]
    fn bad_rows_are_reported_in_place() {
        let input = csv(&[
            r#",2021,34,"Austin, USA",Fintech,Billing,"{'USA': 30}",40,20,10"#,
            r#"Beta,twenty,34,"Austin, USA",Fintech,Billing,"{'USA': 30}",40,20,10"#,
            r#"Gamma,2021,-3,"Austin, USA",Fintech,Billing,"{'USA': 30}",40,20,10"#,
            r#"Delta,2021,34,"Austin, USA",Fintech,Billing,"{'USA': 30}",40,20,10"#,
        ]);
        let rows = read_rows(input.as_bytes()).unwrap();

        assert_eq!(
            rows[0].as_ref().unwrap_err(),
            &RecordError { row: 1, kind: RecordErrorKind::MissingField(source::COMPANY_NAME) }
        );
        assert!(matches!(
            rows[1].as_ref().unwrap_err().kind,
            RecordErrorKind::InvalidNumber { field: source::FOUNDED_YEAR, .. }
        ));
        assert!(matches!(
            rows[2].as_ref().unwrap_err().kind,
            RecordErrorKind::InvalidNumber { field: source::TOTAL_EMPLOYEES, .. }
        ));
        assert_eq!(rows[3].as_ref().unwrap().name, "Delta");
    }

    #[test]
    fn malformed_locations_still_load() {
        let input = csv(&[r#"Omega,2021,34,"Austin, USA",Fintech,Billing,garbage,40,20,10"#]);
        let rows = read_rows(input.as_bytes()).unwrap();
        assert_eq!(rows[0].as_ref().unwrap().employee_locations.raw(), "garbage");
    }

    #[test]
    fn missing_columns_fail_the_whole_source() {
        let err = read_rows("Company Name,Industry\nAcme,SaaS".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing required columns"));
        assert!(read_rows("".as_bytes()).is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            csv(&[r#"Disk,2022,40,"Miami, USA",SaaS,Payroll,"{'USA': 40}",50,25,12"#])
        )
        .unwrap();

        let rows = CsvCompanySource::new(file.path()).load().unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_ok());

        assert!(CsvCompanySource::new("/nonexistent/data.csv").load().is_err());
    }
}
