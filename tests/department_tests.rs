use attendance_tool::DepartmentAliases;

#[test]
fn exact_aliases_match_case_insensitively() {
    let aliases = DepartmentAliases::default();
    assert_eq!(aliases.normalize("psm"), "Community Medicine");
    assert_eq!(aliases.normalize("PSM"), "Community Medicine");
    assert_eq!(aliases.normalize("  FM&T  "), "Forensic Medicine");
    assert_eq!(aliases.normalize("ent"), "ENT");
    assert_eq!(aliases.normalize("Eye"), "Ophthalmology");
}

#[test]
fn substring_fallbacks_apply_after_exact_lookup() {
    let aliases = DepartmentAliases::default();
    assert_eq!(aliases.normalize("Dept of Comm Med"), "Community Medicine");
    assert_eq!(
        aliases.normalize("Forensic Medicine and Toxicology"),
        "Forensic Medicine"
    );
    assert_eq!(aliases.normalize("Ophthal OPD"), "Ophthalmology");
}

#[test]
fn unknown_names_pass_through_verbatim() {
    let aliases = DepartmentAliases::default();
    assert_eq!(aliases.normalize("Radiodiagnosis"), "Radiodiagnosis");
    assert_eq!(aliases.normalize("  Dermatology "), "Dermatology");
}

#[test]
fn canonical_names_are_stable_under_normalization() {
    let aliases = DepartmentAliases::default();
    for canonical in ["Community Medicine", "Forensic Medicine", "ENT", "Ophthalmology"] {
        assert_eq!(aliases.normalize(canonical), canonical);
    }
}

#[test]
fn custom_tables_override_the_defaults() {
    let aliases = DepartmentAliases::new(
        [("im".to_string(), "Internal Medicine".to_string())],
        [("surg".to_string(), "Surgery".to_string())],
    );
    assert_eq!(aliases.normalize("IM"), "Internal Medicine");
    assert_eq!(aliases.normalize("Gen Surgery Unit II"), "Surgery");
    // The custom table knows nothing about the default aliases
    assert_eq!(aliases.normalize("psm"), "psm");
}
