//! Ownership report rows and delimited serialization.

/// Header line of the exported table.
pub const REPORT_HEADER: [&str; 3] = ["repo", "file", "codeowner"];

/// One `(repository, file, owner)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub repository: String,
    pub path: String,
    pub owner: Option<String>,
}

/// Append-only collection of report rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, repository: &str, path: &str, owner: Option<&str>) {
        self.rows.push(ReportRow {
            repository: repository.to_string(),
            path: path.to_string(),
            owner: owner.map(str::to_string),
        });
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize as comma-separated text with a `repo,file,codeowner` header.
    ///
    /// Rows keep production order. An absent owner is an empty field.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        push_record(&mut out, &REPORT_HEADER);
        for row in &self.rows {
            push_record(
                &mut out,
                &[
                    row.repository.as_str(),
                    row.path.as_str(),
                    row.owner.as_deref().unwrap_or_default(),
                ],
            );
        }
        out
    }
}

fn push_record(out: &mut String, fields: &[&str]) {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
