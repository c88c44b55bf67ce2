/// Decides which visited files are documents to extract.
///
/// Matching is a plain `.{ext}` suffix test on the file name, case-sensitive
/// unless configured otherwise, so `scan.PDF` is skipped by default.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
    case_insensitive: bool,
}

impl ExtensionFilter {
    pub fn new<S: AsRef<str>>(extensions: &[S], case_insensitive: bool) -> Self {
        let suffixes = extensions
            .iter()
            .map(|ext| {
                let suffix = format!(".{}", ext.as_ref());
                if case_insensitive {
                    suffix.to_lowercase()
                } else {
                    suffix
                }
            })
            .collect();

        Self {
            suffixes,
            case_insensitive,
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        if self.case_insensitive {
            let lowered = file_name.to_lowercase();
            self.suffixes.iter().any(|s| lowered.ends_with(s.as_str()))
        } else {
            self.suffixes.iter().any(|s| file_name.ends_with(s.as_str()))
        }
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(&["pdf"], false)
    }
}
