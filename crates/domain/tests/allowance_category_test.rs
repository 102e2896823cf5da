use ferrous_rrl_domain::{AllowanceCategory, RCODE_NAME_ERROR, RCODE_NO_ERROR};

const RCODE_SERVFAIL: u16 = 2;
const RCODE_REFUSED: u16 = 5;

#[test]
fn test_noerror_with_answers_is_answer() {
    assert_eq!(
        AllowanceCategory::from_counts(RCODE_NO_ERROR, 1, 0),
        AllowanceCategory::Answer
    );
    assert_eq!(
        AllowanceCategory::from_counts(RCODE_NO_ERROR, 3, 2),
        AllowanceCategory::Answer
    );
}

#[test]
fn test_noerror_with_only_authority_is_referral() {
    assert_eq!(
        AllowanceCategory::from_counts(RCODE_NO_ERROR, 0, 1),
        AllowanceCategory::Referral
    );
}

#[test]
fn test_noerror_with_empty_sections_is_nodata() {
    assert_eq!(
        AllowanceCategory::from_counts(RCODE_NO_ERROR, 0, 0),
        AllowanceCategory::NoData
    );
}

#[test]
fn test_name_error_is_nxdomain_regardless_of_counts() {
    for (answers, authorities) in [(0, 0), (0, 1), (2, 0), (1, 1)] {
        assert_eq!(
            AllowanceCategory::from_counts(RCODE_NAME_ERROR, answers, authorities),
            AllowanceCategory::NxDomain,
            "answers={answers} authorities={authorities}"
        );
    }
}

#[test]
fn test_other_rcodes_are_errors() {
    assert_eq!(
        AllowanceCategory::from_counts(RCODE_SERVFAIL, 0, 0),
        AllowanceCategory::Error
    );
    assert_eq!(
        AllowanceCategory::from_counts(RCODE_REFUSED, 1, 1),
        AllowanceCategory::Error
    );
}

#[test]
fn test_only_referral_and_nxdomain_use_authority_name() {
    let users: Vec<_> = AllowanceCategory::all()
        .iter()
        .filter(|c| c.uses_authority_name())
        .copied()
        .collect();

    assert_eq!(
        users,
        vec![AllowanceCategory::Referral, AllowanceCategory::NxDomain]
    );
}

#[test]
fn test_display_matches_as_str() {
    for category in AllowanceCategory::all() {
        assert_eq!(category.to_string(), category.as_str());
    }
    assert_eq!(AllowanceCategory::NxDomain.to_string(), "nxdomain");
    assert_eq!(AllowanceCategory::NoData.label(), "Empty (NODATA) Answers");
}

#[test]
fn test_serde_uses_lowercase_names() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        category: AllowanceCategory,
    }

    let parsed: Wrapper = toml::from_str(r#"category = "nxdomain""#).unwrap();
    assert_eq!(parsed.category, AllowanceCategory::NxDomain);

    let parsed: Wrapper = toml::from_str(r#"category = "referral""#).unwrap();
    assert_eq!(parsed.category, AllowanceCategory::Referral);
}
