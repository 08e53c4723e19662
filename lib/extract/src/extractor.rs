//! Asset extraction dispatcher
//!
//! [`Extractor`] is the polymorphic entry point: per asset kind it fetches
//! the dataset through the source, applies the aligner/aggregator, and
//! assembles the uniform [`ExtractionResult`] envelope. Retrieval cost is
//! bounded by the [`CostPolicy`]; the `sample` flag records whether the cap
//! was actually hit.

use crate::aggregate::{Constituents, FusedAggregator};
use crate::align::align;
use crate::reducer::{ExtractOptions, ReducerFactory};
use driftx_core::{
    Asset, CardAsset, ColumnAsset, CostPolicy, DataSource, Dataset, FeatureSet, Field, FieldRole,
    Result, Row, SegmentAsset, TableAsset, Visualization,
};
use serde::Serialize;
use tracing::debug;

/// Uniform result envelope of one extraction
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    pub features: FeatureSet,

    /// Per-column feature sets; absent only for Column assets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constituents: Option<Constituents>,

    /// Whether sampling was requested AND the retrieved row count hit the
    /// cap exactly
    pub sample: bool,

    /// The raw dataset; present only for Card assets, which downstream
    /// rendering consumes directly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<Dataset>,
}

pub struct Extractor<'a> {
    source: &'a dyn DataSource,
    factory: &'a dyn ReducerFactory,
    policy: CostPolicy,
}

impl<'a> Extractor<'a> {
    pub fn new(source: &'a dyn DataSource, factory: &'a dyn ReducerFactory) -> Self {
        Self {
            source,
            factory,
            policy: CostPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: CostPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Compute the feature fingerprint of one asset.
    pub fn extract(&self, options: &ExtractOptions, asset: &Asset) -> Result<ExtractionResult> {
        match asset {
            Asset::Column(column) => self.extract_column(options, column),
            Asset::Table(table) => self.extract_table(options, table),
            Asset::Segment(segment) => self.extract_segment(options, segment),
            Asset::Card(card) => self.extract_card(options, card),
        }
    }

    fn sampled(&self, options: &ExtractOptions, row_count: usize) -> bool {
        self.policy.should_sample(options.max_cost.as_ref())
            && row_count == self.policy.sample_cap()
    }

    fn extract_column(
        &self,
        options: &ExtractOptions,
        column: &ColumnAsset,
    ) -> Result<ExtractionResult> {
        let query_options = self.policy.query_options(options.max_cost.as_ref());
        let dataset = self
            .source
            .fetch_column(&column.table, &column.field, &query_options)?;
        let sample = self.sampled(options, dataset.row_count());

        // Degenerate one-column aggregation: a single reducer over the values
        let index = dataset.col_index_by_name(&column.field.name).unwrap_or(0);
        let mut reducer = self.factory.build(options, &column.field);
        for row in &dataset.rows {
            reducer.step(&row[index]);
        }

        let mut features = reducer.complete();
        features.insert("table", column.table.clone());

        Ok(ExtractionResult {
            features,
            constituents: None,
            sample,
            dataset: None,
        })
    }

    fn extract_table(
        &self,
        options: &ExtractOptions,
        table: &TableAsset,
    ) -> Result<ExtractionResult> {
        let query_options = self.policy.query_options(options.max_cost.as_ref());
        let dataset = self.source.fetch_table(&table.table, &query_options)?;
        let sample = self.sampled(options, dataset.row_count());
        debug!(table = %table.table, rows = dataset.row_count(), sample, "extracting table");

        let constituents =
            FusedAggregator::new(self.factory, options, &dataset.cols).run(&dataset.rows);
        let features = FeatureSet::new().with("table", table.table.clone());

        Ok(ExtractionResult {
            features,
            constituents: Some(constituents),
            sample,
            dataset: None,
        })
    }

    fn extract_segment(
        &self,
        options: &ExtractOptions,
        segment: &SegmentAsset,
    ) -> Result<ExtractionResult> {
        let query_options = self.policy.query_options(options.max_cost.as_ref());
        let Dataset { cols, rows } = self.source.fetch_table(&segment.table, &query_options)?;
        // The cap governs retrieval; the predicate narrows rows afterwards
        let sample = self.sampled(options, rows.len());

        let rows: Vec<Row> = rows
            .into_iter()
            .filter(|row| segment.definition.matches(&cols, row))
            .collect();
        debug!(segment = %segment.segment, kept = rows.len(), "segment predicate applied");

        let constituents = FusedAggregator::new(self.factory, options, &cols).run(&rows);
        let features = FeatureSet::new()
            .with("table", segment.table.clone())
            .with("segment", segment.segment.clone());

        Ok(ExtractionResult {
            features,
            constituents: Some(constituents),
            sample,
            dataset: None,
        })
    }

    fn extract_card(&self, options: &ExtractOptions, card: &CardAsset) -> Result<ExtractionResult> {
        let query_options = self.policy.query_options(options.max_cost.as_ref());
        let query = card.query.with_options(&query_options);
        let mut dataset = self.source.execute(&query)?;
        let sample = self.sampled(options, dataset.row_count());

        if let Some(visualization) = &card.visualization {
            tag_roles(&mut dataset.cols, visualization);
        }

        let constituents =
            FusedAggregator::new(self.factory, options, &dataset.cols).run(&dataset.rows);

        let mut features = match comparison_pair(&dataset.cols) {
            Some((dimension, metric)) => {
                let aligned = align((dimension, metric), &dataset.cols, &dataset.rows)?;
                let pair_options = ExtractOptions {
                    query: Some(card.query.clone()),
                    ..options.clone()
                };
                let mut reducer = self.factory.build_pair(&pair_options, (dimension, metric));
                for (x, y) in aligned.iter() {
                    reducer.step(x, y);
                }
                reducer.complete()
            }
            None => {
                debug!(card = %card.card, "no dimension/metric pair; skipping relation features");
                FeatureSet::new()
            }
        };
        features.insert("card", card.card.clone());
        features.insert("table", card.table.clone());

        Ok(ExtractionResult {
            features,
            constituents: Some(constituents),
            sample,
            dataset: Some(dataset),
        })
    }
}

/// Tag roles from visualization hints, but only when the result does not
/// already declare a role on every column. Only the first declared metric
/// and dimension count; the match is by name.
fn tag_roles(cols: &mut [Field], visualization: &Visualization) {
    if cols.iter().all(|col| col.role != FieldRole::None) {
        return;
    }
    if let Some(metric) = visualization.primary_metric() {
        if let Some(col) = cols.iter_mut().find(|col| col.name == metric) {
            debug!(column = %col.name, "tagged as aggregation");
            col.role = FieldRole::Aggregation;
        }
    }
    if let Some(dimension) = visualization.primary_dimension() {
        if let Some(col) = cols.iter_mut().find(|col| col.name == dimension) {
            debug!(column = %col.name, "tagged as breakout");
            col.role = FieldRole::Breakout;
        }
    }
}

/// The declared pair: first breakout, then the aggregation column or -
/// failing that - the second breakout.
fn comparison_pair(cols: &[Field]) -> Option<(&Field, &Field)> {
    let mut breakouts = cols.iter().filter(|col| col.role == FieldRole::Breakout);
    let first = breakouts.next()?;
    let second = cols
        .iter()
        .find(|col| col.role == FieldRole::Aggregation)
        .or_else(|| breakouts.next())?;
    Some((first, second))
}
