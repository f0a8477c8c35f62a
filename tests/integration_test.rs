//! Integration test: config load, CSV ingest, pipeline run, verdicts, no model.

use std::io::Write;
use std::path::Path;
use uba_pipeline::{
    config::{PipelineConfig, RiskConfig},
    features::{FeaturePipeline, FEATURE_COLUMNS},
    ingest, AnomalyScorer, OnnxScorer, PipelineError, RiskEngine, Verdict,
};

const LOGON_CSV: &str = "\
user,date,activity,pc
alice,01/04/2010 08:30:00,Logon,PC-1
alice,01/04/2010 17:00:00,Logoff,PC-1
bob,01/09/2010 22:10:00,logon,PC-7
";

const FILE_CSV: &str = "\
user,date,activity,filename,to_removable_media,from_removable_media
alice,01/04/2010 09:00:00,File Open,report.docx,False,False
bob,01/09/2010 22:15:00,File Write,passwords_backup.txt,True,False
";

const EMAIL_CSV: &str = "\
user,date,activity,to,attachments,size
alice,01/04/2010 10:00:00,Send,carol@corp.com,plan.pdf,20000
bob,01/09/2010 22:20:00,send,out@rival.com,,5000
";

const PSYCHO_CSV: &str = "\
user,O,C,E,A,N
alice,50,80,40,70,60
";

fn build_matrix() -> uba_pipeline::FeatureMatrix {
    let logon = ingest::read_logon(LOGON_CSV.as_bytes()).unwrap();
    let files = ingest::read_file_events(FILE_CSV.as_bytes()).unwrap();
    let emails = ingest::read_email(EMAIL_CSV.as_bytes()).unwrap();
    let psycho = ingest::read_psychometric(PSYCHO_CSV.as_bytes()).unwrap();
    FeaturePipeline::new().run(&logon, &files, &emails, &psycho)
}

#[test]
fn config_load_default() {
    let c = PipelineConfig::load(Path::new("nonexistent.json"));
    assert_eq!(c.risk.anomaly_threshold, 0.0);
    assert_eq!(c.inputs.logon, Path::new("logon.csv"));
}

#[test]
fn end_to_end_matrix_shape() {
    let matrix = build_matrix();
    assert_eq!(matrix.len(), 2);
    assert_eq!(FEATURE_COLUMNS.len(), 19);
    let alice = matrix.get("alice").unwrap();
    assert_eq!(alice.logon.total_logons, 1.0);
    assert_eq!(alice.logon.logon_logoff_ratio, 0.5);
    assert_eq!(alice.email.emails_with_attachments, 1.0);
    assert_eq!(alice.personality_risk_index, 40.5);

    let bob = matrix.get("bob").unwrap();
    assert_eq!(bob.logon.after_hours_logons, 1.0);
    assert_eq!(bob.logon.weekend_logons, 1.0); // 2010-01-09 is a Saturday
    assert_eq!(bob.file.usb_file_writes, 1.0);
    assert_eq!(bob.file.sensitive_file_accesses, 1.0);
    assert_eq!(bob.personality_risk_index, 0.0); // no survey row, 0-filled
}

#[test]
fn ingest_from_disk_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logon.csv");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(LOGON_CSV.as_bytes()).unwrap();
    drop(f);

    let events = ingest::read_logon(std::fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(events.len(), 3);
    assert!(events[0].is_logon());
    assert!(events[1].is_logoff());
}

#[test]
fn missing_required_column_names_input_and_column() {
    let csv = "user,date,activity\nalice,01/04/2010 08:30:00,Logon\n";
    let err = ingest::read_logon(csv.as_bytes()).unwrap_err();
    match err {
        PipelineError::MissingRequiredColumn { input, column } => {
            assert_eq!(input, "logon");
            assert_eq!(column, "pc");
        }
        other => panic!("expected MissingRequiredColumn, got {other}"),
    }
}

#[test]
fn undecodable_row_is_unparseable_input() {
    let csv = "user,date,activity,filename,to_removable_media,from_removable_media\n\
               alice,01/04/2010 09:00:00,File Open,a.txt,maybe,False\n";
    let err = ingest::read_file_events(csv.as_bytes()).unwrap_err();
    match err {
        PipelineError::UnparseableInput { input, .. } => assert_eq!(input, "file"),
        other => panic!("expected UnparseableInput, got {other}"),
    }
}

#[test]
fn onnx_no_model_scores_zero() {
    let scorer = OnnxScorer::load(Path::new("nonexistent.onnx"), FEATURE_COLUMNS.len()).unwrap();
    assert!(!scorer.is_loaded());
    let matrix = build_matrix();
    let scores = scorer.decision_scores(&matrix).unwrap();
    assert_eq!(scores, vec![0.0, 0.0]);
}

#[test]
fn risk_engine_sign_convention() {
    // signed decision function: below threshold = anomalous
    let engine = RiskEngine::new(RiskConfig {
        anomaly_threshold: 0.0,
    });
    assert_eq!(engine.label(-0.4), Verdict::Anomalous);
    assert_eq!(engine.label(0.0), Verdict::Normal);
    assert_eq!(engine.label(0.4), Verdict::Normal);
}

#[test]
fn classify_pairs_users_with_scores_in_order() {
    struct FixedScorer;
    impl AnomalyScorer for FixedScorer {
        fn decision_scores(
            &self,
            matrix: &uba_pipeline::FeatureMatrix,
        ) -> uba_pipeline::Result<Vec<f32>> {
            Ok((0..matrix.len()).map(|i| i as f32 - 0.5).collect())
        }
    }

    let matrix = build_matrix();
    let engine = RiskEngine::new(RiskConfig {
        anomaly_threshold: 0.0,
    });
    let verdicts = engine.classify(&matrix, &FixedScorer).unwrap();
    assert_eq!(verdicts.len(), 2);
    assert_eq!(verdicts[0].user, "alice");
    assert_eq!(verdicts[0].verdict, Verdict::Anomalous);
    assert_eq!(verdicts[1].user, "bob");
    assert_eq!(verdicts[1].verdict, Verdict::Normal);
}
