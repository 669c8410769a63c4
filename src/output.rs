use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};

/// Type-erased view of one generated table: a markdown rendering for the
/// console and a CSV rendering for export. Implemented once for any
/// `Vec<Row>` whose row type is `Tabled + Serialize`.
pub trait RenderTable {
    fn to_markdown(&self) -> String;
    fn to_csv_string(&self) -> Result<String, Box<dyn Error>>;
}

impl<T> RenderTable for Vec<T>
where
    T: Tabled + Serialize + Clone,
{
    fn to_markdown(&self) -> String {
        if self.is_empty() {
            return "(no rows)".to_string();
        }
        Table::new(self.iter().cloned())
            .with(Style::markdown())
            .to_string()
    }

    fn to_csv_string(&self) -> Result<String, Box<dyn Error>> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in self {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Insertion-ordered collection of named tables. Iteration (and therefore
/// file enumeration on export) always follows insertion order so repeated
/// runs produce identical output.
#[derive(Default)]
pub struct ReportSet {
    entries: Vec<(&'static str, Box<dyn RenderTable>)>,
}

impl ReportSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, table: impl RenderTable + 'static) {
        self.entries.push((name, Box::new(table)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &dyn RenderTable)> {
        self.entries.iter().map(|(name, table)| (*name, table.as_ref()))
    }

    /// Write one `<name>.csv` per table into `out_dir`, creating the
    /// directory if needed. Existing files are overwritten whole. Returns
    /// the written paths in insertion order.
    pub fn export_all(&self, out_dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
        fs::create_dir_all(out_dir)?;
        let mut written = Vec::with_capacity(self.entries.len());
        for (name, table) in self.iter() {
            let path = out_dir.join(format!("{}.csv", name));
            fs::write(&path, table.to_csv_string()?)?;
            written.push(path);
        }
        Ok(written)
    }
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    let s = serde_json::to_string_pretty(value)?;
    fs::write(path, s)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayerFrameworkRow;

    fn sample_rows() -> Vec<PlayerFrameworkRow> {
        vec![
            PlayerFrameworkRow {
                evaluation_criteria: "Social Impact Assessment".to_string(),
                weight_percentage: 40,
                scoring_method: "Health/addiction risk analysis".to_string(),
            },
            PlayerFrameworkRow {
                evaluation_criteria: "Financial Terms".to_string(),
                weight_percentage: 20,
                scoring_method: "Contract value vs. reputation risk".to_string(),
            },
        ]
    }

    #[test]
    fn csv_rendering_uses_report_headers() {
        let csv = sample_rows().to_csv_string().unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Evaluation_Criteria,Weight_Percentage,Scoring_Method"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Social Impact Assessment,40,Health/addiction risk analysis"
        );
    }

    #[test]
    fn export_follows_insertion_order() {
        let mut set = ReportSet::new();
        set.insert("B_Second", sample_rows());
        set.insert("A_First", sample_rows());
        let names: Vec<_> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B_Second", "A_First"]);

        let dir = tempfile::tempdir().unwrap();
        let written = set.export_all(dir.path()).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("B_Second.csv"));
        assert!(written[1].ends_with("A_First.csv"));
        assert!(written.iter().all(|p| p.exists()));
    }

    #[test]
    fn markdown_rendering_handles_empty_tables() {
        let empty: Vec<PlayerFrameworkRow> = Vec::new();
        assert_eq!(empty.to_markdown(), "(no rows)");
    }
}
