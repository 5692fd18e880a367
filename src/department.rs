use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Best-effort canonicalization of free-text department names.
///
/// Exact aliases are matched case-insensitively after trimming; when none
/// match, ordered substring fallbacks apply; otherwise the input passes
/// through verbatim. Both the generated and the override calendar must be
/// normalized with the same table before merging so their keys compare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentAliases {
    /// Lower-cased alias -> canonical name.
    exact: BTreeMap<String, String>,
    /// Lower-cased needle -> canonical name, tried in order.
    substring: Vec<(String, String)>,
}

impl DepartmentAliases {
    pub fn new(
        exact: impl IntoIterator<Item = (String, String)>,
        substring: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let exact = exact
            .into_iter()
            .map(|(alias, canonical)| (alias.trim().to_lowercase(), canonical))
            .collect();
        let substring = substring
            .into_iter()
            .map(|(needle, canonical)| (needle.trim().to_lowercase(), canonical))
            .collect();
        Self { exact, substring }
    }

    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        let folded = trimmed.to_lowercase();
        if let Some(canonical) = self.exact.get(&folded) {
            return canonical.clone();
        }
        for (needle, canonical) in &self.substring {
            if folded.contains(needle.as_str()) {
                return canonical.clone();
            }
        }
        trimmed.to_string()
    }
}

impl Default for DepartmentAliases {
    fn default() -> Self {
        let pair = |a: &str, c: &str| (a.to_string(), c.to_string());
        Self::new(
            [
                pair("psm", "Community Medicine"),
                pair("community medicine", "Community Medicine"),
                pair("fm&t", "Forensic Medicine"),
                pair("fmt", "Forensic Medicine"),
                pair("forensic medicine & toxicology", "Forensic Medicine"),
                pair("ent", "ENT"),
                pair("otorhinolaryngology", "ENT"),
                pair("ophthalmology", "Ophthalmology"),
                pair("eye", "Ophthalmology"),
                pair("gen med", "Internal Medicine"),
                pair("obg", "Obs & Gynae"),
                pair("obstetrics & gynaecology", "Obs & Gynae"),
            ],
            [
                pair("comm med", "Community Medicine"),
                pair("forensic", "Forensic Medicine"),
                pair("ophthal", "Ophthalmology"),
            ],
        )
    }
}
