use hwentropy::Shortfall;

#[test]
fn test_error_shortfall_reports_missing_bytes() {
    let err = Shortfall {
        requested: 24,
        written: 13,
    };

    assert_eq!(err.missing(), 11);
}

#[test]
fn test_error_shortfall_display_names_counts() {
    let err = Shortfall {
        requested: 16,
        written: 0,
    };

    let text = err.to_string();
    assert!(text.contains("0 of 16"));
}

#[test]
fn test_error_shortfall_is_a_std_error() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(Shortfall {
        requested: 1,
        written: 0,
    });

    assert!(boxed.source().is_none());
}

#[test]
fn test_error_shortfall_missing_saturates() {
    let err = Shortfall {
        requested: 1,
        written: 2,
    };

    assert_eq!(err.missing(), 0);
}
