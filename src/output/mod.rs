//! Rendering of assessments, feature vectors and the tier legend.

use serde_json::json;
use std::io::Write;

use crate::features::FeatureVector;
use crate::formatting::{FormattingConfig, Styler};
use crate::risk::{RiskAssessment, ThresholdScheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Markdown,
    Json,
}

pub trait OutputWriter {
    fn write_assessment(&mut self, assessment: &RiskAssessment) -> anyhow::Result<()>;
    fn write_features(&mut self, features: &FeatureVector) -> anyhow::Result<()>;
    fn write_legend(&mut self, scheme: ThresholdScheme) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit(&mut self, value: &impl serde::Serialize) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_assessment(&mut self, assessment: &RiskAssessment) -> anyhow::Result<()> {
        self.emit(assessment)
    }

    fn write_features(&mut self, features: &FeatureVector) -> anyhow::Result<()> {
        self.emit(features)
    }

    fn write_legend(&mut self, scheme: ThresholdScheme) -> anyhow::Result<()> {
        self.emit(&json!({ "scheme": scheme, "bands": scheme.bands() }))
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_assessment(&mut self, a: &RiskAssessment) -> anyhow::Result<()> {
        writeln!(self.writer, "# Early Diabetes Risk")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Prediction Confidence:** `{}`", a.probability)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**{}** ({}): {}", a.tier.label(), a.tier, a.message)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Why this result?")?;
        writeln!(self.writer)?;
        for e in &a.explanations {
            writeln!(self.writer, "- **{}**: {} ({})", e.label, e.display, e.rationale)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "> {}", a.note)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "_Model `{}`, thresholds `{}`, clamping `{}`._",
            a.model, a.scheme, a.clamp_policy
        )?;
        Ok(())
    }

    fn write_features(&mut self, features: &FeatureVector) -> anyhow::Result<()> {
        writeln!(self.writer, "| # | Feature | Value |")?;
        writeln!(self.writer, "|---|---------|-------|")?;
        for (i, (feature, value)) in features.iter().enumerate() {
            writeln!(self.writer, "| {} | {} | {:.4} |", i, feature, value)?;
        }
        Ok(())
    }

    fn write_legend(&mut self, scheme: ThresholdScheme) -> anyhow::Result<()> {
        writeln!(self.writer, "## Risk Interpretation Scale ({})", scheme)?;
        writeln!(self.writer)?;
        for band in scheme.bands() {
            writeln!(self.writer, "- **{}:** {}", band.tier.label(), band)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    styler: Styler,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            styler: Styler::new(formatting),
        }
    }

    fn divider(&mut self) -> std::io::Result<()> {
        writeln!(self.writer, "{}", self.styler.dim(&"-".repeat(60)))
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_assessment(&mut self, a: &RiskAssessment) -> anyhow::Result<()> {
        let s = &self.styler;
        writeln!(
            self.writer,
            "{} {}",
            s.header("Prediction Confidence:"),
            s.bold(&a.probability.to_string())
        )?;
        writeln!(
            self.writer,
            "{} {}: {}",
            s.tier_icon(a.tier),
            s.severity(a.tier.severity(), a.tier.label()),
            a.message
        )?;
        self.divider()?;
        writeln!(self.writer, "{}", self.styler.header("Why this result?"))?;
        for e in &a.explanations {
            writeln!(
                self.writer,
                "  - {}: {} ({})",
                self.styler.bold(e.label),
                e.display,
                e.rationale
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", a.note)?;
        writeln!(
            self.writer,
            "{}",
            self.styler.dim(&format!(
                "model={} thresholds={} clamping={}",
                a.model, a.scheme, a.clamp_policy
            ))
        )?;
        Ok(())
    }

    fn write_features(&mut self, features: &FeatureVector) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.styler.header("Feature vector"))?;
        for (i, (feature, value)) in features.iter().enumerate() {
            writeln!(self.writer, "  {:>2}  {:<22} {:>12.4}", i, feature.name(), value)?;
        }
        Ok(())
    }

    fn write_legend(&mut self, scheme: ThresholdScheme) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            self.styler
                .header(&format!("Risk Interpretation Scale ({})", scheme))
        )?;
        for band in scheme.bands() {
            let label = format!("{:<16}", band.tier.label());
            writeln!(
                self.writer,
                "  {} {} {}",
                self.styler.tier_icon(band.tier),
                self.styler.severity(band.tier.severity(), &label),
                band
            )?;
        }
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout(), formatting)),
    }
}
