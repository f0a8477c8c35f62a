//! Pipeline benchmark: raw event tables → aligned feature matrix.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uba_pipeline::ingest::{self, EmailEvent, FileEvent, LogonEvent};
use uba_pipeline::FeaturePipeline;

fn make_logon_events(users: usize, per_user: usize) -> Vec<LogonEvent> {
    let mut out = Vec::with_capacity(users * per_user);
    for u in 0..users {
        for i in 0..per_user {
            out.push(LogonEvent {
                user: format!("user_{u}"),
                date: format!("01/{:02}/2010 {:02}:00:00", 1 + i % 28, i % 24),
                activity: if i % 2 == 0 { "Logon" } else { "Logoff" }.to_string(),
                pc: format!("PC-{}", i % 5),
            });
        }
    }
    out
}

fn make_file_events(users: usize, per_user: usize) -> Vec<FileEvent> {
    let mut out = Vec::with_capacity(users * per_user);
    for u in 0..users {
        for i in 0..per_user {
            out.push(FileEvent {
                user: format!("user_{u}"),
                date: format!("01/{:02}/2010 09:{:02}:00", 1 + i % 28, i % 60),
                activity: if i % 3 == 0 { "File Write" } else { "File Open" }.to_string(),
                filename: format!("doc_{}.txt", i % 40),
                to_removable_media: i % 7 == 0,
                from_removable_media: i % 11 == 0,
            });
        }
    }
    out
}

fn make_email_events(users: usize, per_user: usize) -> Vec<EmailEvent> {
    let mut out = Vec::with_capacity(users * per_user);
    for u in 0..users {
        for i in 0..per_user {
            out.push(EmailEvent {
                user: format!("user_{u}"),
                date: format!("01/{:02}/2010 14:{:02}:00", 1 + i % 28, i % 60),
                activity: "Send".to_string(),
                to: Some(format!("peer_{}@corp.com", i % 9)),
                attachments: (i % 4 == 0).then(|| "report.pdf".to_string()),
                size: Some(1000.0 + i as f64),
            });
        }
    }
    out
}

fn bench_feature_pipeline(c: &mut Criterion) {
    let logons = make_logon_events(50, 40);
    let files = make_file_events(50, 40);
    let emails = make_email_events(50, 40);
    let pipeline = FeaturePipeline::new();

    c.bench_function("pipeline_50_users_120_events_each", |b| {
        b.iter(|| {
            black_box(pipeline.run(
                black_box(&logons),
                black_box(&files),
                black_box(&emails),
                &[],
            ))
        })
    });
}

fn bench_csv_ingest(c: &mut Criterion) {
    let mut csv = String::from("user,date,activity,pc\n");
    for ev in make_logon_events(50, 40) {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            ev.user, ev.date, ev.activity, ev.pc
        ));
    }

    c.bench_function("ingest_logon_2000_rows", |b| {
        b.iter(|| black_box(ingest::read_logon(black_box(csv.as_bytes())).unwrap()))
    });
}

criterion_group!(benches, bench_feature_pipeline, bench_csv_ingest);
criterion_main!(benches);
