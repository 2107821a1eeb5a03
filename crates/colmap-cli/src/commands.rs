use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{info, info_span};

use colmap_cli::report::SuggestReport;
use colmap_ingest::{read_seller_file, read_template};
use colmap_map::{
    Candidate, MappingSession, SessionCommand, normalize_name, rank_candidates, similarity,
};
use colmap_model::{ColumnMapping, MappingRecord, SourceColumn};

use crate::cli::{RankArgs, ScoreArgs, SuggestArgs};

/// A stored mapping as written by `--output`, or just its column map.
#[derive(Deserialize)]
#[serde(untagged)]
enum ExistingMapping {
    Record(MappingRecord),
    Columns(ColumnMapping),
}

impl ExistingMapping {
    fn into_columns(self) -> ColumnMapping {
        match self {
            Self::Record(record) => record.column_mapping,
            Self::Columns(columns) => columns,
        }
    }
}

pub struct SuggestOutcome {
    pub report: SuggestReport,
    pub record_path: Option<PathBuf>,
}

pub fn run_suggest(args: &SuggestArgs) -> Result<SuggestOutcome> {
    let span = info_span!("suggest", template = %args.template.display());
    let _guard = span.enter();

    let targets = read_template(&args.template).context("load template")?;
    let seller = read_seller_file(&args.seller).context("load seller file")?;

    let mut session = MappingSession::new().with_auto_map(false);
    session.apply(SessionCommand::LoadTemplate(targets))?;
    session.apply(SessionCommand::LoadSourceFile(seller.columns))?;
    if let Some(path) = &args.existing {
        let columns = load_existing(path)?;
        info!(entries = columns.len(), "seeding from existing mapping");
        session.apply(SessionCommand::LoadExisting(columns))?;
    }
    session.apply(SessionCommand::AutoMap)?;

    let report = SuggestReport::from_session(&session);
    let mut record_path = None;
    if let Some(path) = &args.output {
        if report.is_blocked() {
            bail!(
                "not writing {}: required attributes are not mapped: {}",
                path.display(),
                report.missing_required.join(", ")
            );
        }
        let marketplace_id = args
            .marketplace_id
            .clone()
            .unwrap_or_else(|| file_stem(&args.template));
        let seller_file_id = args
            .seller_file_id
            .clone()
            .unwrap_or_else(|| file_stem(&args.seller));
        let record = session.to_record(marketplace_id, seller_file_id)?;
        let json = serde_json::to_string_pretty(&record).context("serialize mapping record")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), columns = record.mapping_count(), "mapping saved");
        record_path = Some(path.clone());
    }

    Ok(SuggestOutcome {
        report,
        record_path,
    })
}

pub struct ScoreOutcome {
    pub normalized_a: String,
    pub normalized_b: String,
    pub score: f64,
}

pub fn run_score(args: &ScoreArgs) -> ScoreOutcome {
    ScoreOutcome {
        normalized_a: normalize_name(&args.a),
        normalized_b: normalize_name(&args.b),
        score: similarity(&args.a, &args.b),
    }
}

pub struct RankOutcome {
    pub candidates: Vec<Candidate>,
    pub columns: Vec<SourceColumn>,
}

pub fn run_rank(args: &RankArgs) -> Result<RankOutcome> {
    let seller = read_seller_file(&args.seller).context("load seller file")?;
    let candidates = rank_candidates(&args.target, &seller.columns);
    Ok(RankOutcome {
        candidates,
        columns: seller.columns,
    })
}

fn load_existing(path: &Path) -> Result<ColumnMapping> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let existing: ExistingMapping = serde_json::from_str(&text)
        .with_context(|| format!("parse existing mapping {}", path.display()))?;
    Ok(existing.into_columns())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
