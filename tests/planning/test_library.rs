//! Tests for loading reference PK records and planning against them

use beplanner::pk::LibraryError;
use beplanner::prelude::*;
use std::path::PathBuf;

/// Write `contents` to a fresh file in the temp directory
fn temp_csv(tag: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "beplanner_{}_{}.csv",
        tag,
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_builtin_names_resolve_to_same_record() {
    let library = PKLibrary::builtin();
    assert_eq!(library.get("omeprazole"), library.get("омепразол"));
    assert_eq!(library.get("Atorvastatin").t_half, Some(14.0));
    assert!(library.list().windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_csv_library() {
    let path = temp_csv(
        "library",
        "# reference products\n\
         INN, Cmax, AUC, Tmax, T_Half, CV_Intra\n\
         Drug-A, 120.5, 900, 1.5, 6.0, 0.22\n\
         drug-b, , , , 72, \n",
    );
    let library = PKLibrary::from_csv(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(library.len(), 2);
    let a = library.get("drug-a");
    assert_eq!(a.cmax, Some(120.5));
    assert_eq!(a.cv_intra, Some(0.22));

    let b = library.get("DRUG-B");
    assert_eq!(b.t_half, Some(72.0));
    assert_eq!(b.cmax, None);
    assert_eq!(b.cv_intra, None);
}

#[test]
fn test_csv_rejects_invalid_cv() {
    let path = temp_csv(
        "invalid",
        "inn,cmax,auc,tmax,t_half,cv_intra\nfine,,,,4,0.2\nx,,,,4,1.5\n",
    );
    let mut library = PKLibrary::builtin();
    let before = library.len();
    let result = library.load_csv(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(LibraryError::InvalidRecord { .. })));
    assert_eq!(library.len(), before);
    assert!(!library.contains("fine"));
}

#[test]
fn test_missing_csv_file() {
    let result = PKLibrary::from_csv("/nonexistent/beplanner/pk.csv");
    assert!(matches!(result, Err(LibraryError::Io(_))));
}

#[test]
fn test_planner_uses_custom_library() {
    let library = PKLibrary::from_json(
        r#"[{ "names": ["longacting"], "t_half": 96.0, "cv_intra": 0.2 }]"#,
    )
    .unwrap();
    let planner = Planner::default().with_library(library);

    let plan = planner.plan(&StudyInput::new(" LongActing ", 5.0)).unwrap();
    assert_eq!(plan.design.design_type, DesignType::Parallel);
    assert_eq!(plan.pk.t_half, Some(96.0));
    // 2x2 N at CV 0.20 is 20; the parallel factor makes it 26
    assert_eq!(plan.sample_size.base_n, 26);

    // Built-in drugs are unknown to the custom library
    let fallback = planner.plan(&StudyInput::new("omeprazole", 20.0)).unwrap();
    assert!(fallback.pk.is_unknown());
    assert_eq!(fallback.sample_size.cv, 0.25);
}

#[test]
fn test_batch_keeps_order_and_isolates_errors() {
    let planner = Planner::default();
    let inputs = vec![
        StudyInput::new("omeprazole", 20.0),
        StudyInput::new("", 20.0),
        StudyInput::new("atorvastatin", 40.0),
    ];
    let results = planner.plan_batch(&inputs);

    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0].as_ref().unwrap().design.design_type,
        DesignType::TwoByTwo
    );
    assert!(matches!(results[1], Err(PlanningError::Validation(_))));
    assert_eq!(
        results[2].as_ref().unwrap().design.design_type,
        DesignType::FourPeriodReplicate
    );
}
