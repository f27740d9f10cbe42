//! The export pipeline.
//!
//! Stages, in order:
//! 1. **Prepare**: clear/create the output directory, load the optional
//!    ordering directives.
//! 2. **Reference data**: load the label tables (primary required,
//!    secondary optional) and the skill-name index.
//! 3. **Categories**: for each registered category, read its source
//!    tables, apply the passes row by row, serialize, write.
//!
//! A failing category is reported and the remaining categories still
//! run; the outcome records per-category status for the summary table.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};

use dlwiki_ingest::{build_index, read_label_table, read_table, TABLE_EXT};
use dlwiki_model::{
    LabelIndex, OrderingDirectives, PRIMARY_LANGUAGE, RecordStore, SECONDARY_LANGUAGE,
    is_placeholder,
};
use dlwiki_render::render_store;
use dlwiki_transform::{CATEGORIES, CategorySpec, Scratch, TransformContext};

use crate::cli::ExportArgs;

/// Table holding the primary-language labels.
const TEXT_LABEL_TABLE: &str = "TextLabel";
/// Table holding the secondary-language labels; optional.
const TEXT_LABEL_JP_TABLE: &str = "TextLabelJP";
/// Table backing the skill-name reference index.
const SKILL_DATA_TABLE: &str = "SkillData";

/// Result of one category's run.
#[derive(Debug)]
pub struct CategoryResult {
    pub name: &'static str,
    pub template: &'static str,
    pub records: usize,
    pub output: Option<PathBuf>,
    pub error: Option<String>,
}

/// Result of a whole export run.
#[derive(Debug)]
pub struct ExportOutcome {
    pub output_dir: PathBuf,
    pub categories: Vec<CategoryResult>,
}

impl ExportOutcome {
    pub fn has_errors(&self) -> bool {
        self.categories.iter().any(|c| c.error.is_some())
    }
}

pub fn run_export(args: &ExportArgs) -> Result<ExportOutcome> {
    if args.delete_old && args.output_dir.exists() {
        match fs::remove_dir_all(&args.output_dir) {
            Ok(()) => info!("deleted old {}", args.output_dir.display()),
            Err(e) => warn!("could not delete old {}: {e}", args.output_dir.display()),
        }
    }
    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("create output dir {}", args.output_dir.display()))?;

    let ordering = match &args.ordering {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read ordering file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse ordering file {}", path.display()))?
        }
        None => OrderingDirectives::default(),
    };

    let ctx = load_reference_data(&args.input_dir)?;

    let mut categories = Vec::with_capacity(CATEGORIES.len());
    for spec in CATEGORIES {
        let result = match process_category(spec, &args.input_dir, &ctx) {
            Ok(store) => {
                let text = render_store(&store, spec.template, spec.layout, &ordering);
                let output = args.output_dir.join(format!("{}.{TABLE_EXT}", spec.name));
                match fs::write(&output, text) {
                    Ok(()) => {
                        info!(category = spec.name, records = store.len(), "saved {}", output.display());
                        CategoryResult {
                            name: spec.name,
                            template: spec.template,
                            records: store.len(),
                            output: Some(output),
                            error: None,
                        }
                    }
                    Err(e) => failed(spec, store.len(), format!("write {}: {e}", output.display())),
                }
            }
            Err(e) => failed(spec, 0, format!("{e:#}")),
        };
        categories.push(result);
    }

    Ok(ExportOutcome {
        output_dir: args.output_dir.clone(),
        categories,
    })
}

fn failed(spec: &CategorySpec, records: usize, cause: String) -> CategoryResult {
    // One category failing must not take the rest of the batch down.
    error!(category = spec.name, "category failed: {cause}");
    CategoryResult {
        name: spec.name,
        template: spec.template,
        records,
        output: None,
        error: Some(cause),
    }
}

/// Load the label tables and the skill-name index.
fn load_reference_data(input_dir: &Path) -> Result<TransformContext> {
    let mut labels = LabelIndex::new();

    let primary_path = input_dir.join(format!("{TEXT_LABEL_TABLE}.{TABLE_EXT}"));
    let primary_rows = read_label_table(&primary_path)
        .with_context(|| format!("load primary labels from {}", primary_path.display()))?;
    labels.insert_language(
        PRIMARY_LANGUAGE,
        build_index(&primary_rows, None, None)
            .into_values()
            .context("primary label table is not a two-column key/value table")?,
    );

    let secondary_path = input_dir.join(format!("{TEXT_LABEL_JP_TABLE}.{TABLE_EXT}"));
    match read_label_table(&secondary_path) {
        Ok(rows) => {
            if let Some(table) = build_index(&rows, None, None).into_values() {
                labels.insert_language(SECONDARY_LANGUAGE, table);
            }
        }
        Err(e) => debug!("no secondary language labels: {e}"),
    }

    let skill_rows = read_table(input_dir, SKILL_DATA_TABLE)
        .with_context(|| format!("load skill names from {SKILL_DATA_TABLE}.{TABLE_EXT}"))?;
    let skill_names: HashMap<String, String> = build_index(&skill_rows, None, Some("_Name"))
        .into_values()
        .unwrap_or_default();

    Ok(TransformContext::new(labels, skill_names))
}

/// Run every pass of one category over its source tables.
fn process_category(
    spec: &CategorySpec,
    input_dir: &Path,
    ctx: &TransformContext,
) -> Result<RecordStore> {
    let mut store = RecordStore::new();
    let mut scratch = Scratch::default();
    for (table, pass) in spec.passes {
        let rows =
            read_table(input_dir, table).with_context(|| format!("read source table {table}"))?;
        debug!(category = spec.name, table, rows = rows.len(), "applying pass");
        for row in &rows {
            if is_placeholder(row) {
                continue;
            }
            pass(row, &mut store, &mut scratch, ctx)
                .with_context(|| format!("transform row of {table}"))?;
        }
    }
    Ok(store)
}
