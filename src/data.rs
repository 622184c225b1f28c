use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The persisted audience document for the La Réunion radio market.
/// Field names follow the canonical JSON shape (camelCase).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudienceData {
    pub last_update: String,
    pub period: String,
    pub freedom1: StationFigures,
    pub freedom2: StationFigures,
    pub rankings: Vec<RankingEntry>,
    pub shows: Vec<Show>,
    pub sources: Vec<SourceCitation>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StationFigures {
    /// Part d'audience: market-share percentage.
    pub pda: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<u64>,
    /// Change in share versus the previous measurement period, in points.
    pub evolution: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evolution_year: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RankingEntry {
    pub name: String,
    pub pda: f64,
    pub evolution: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Show {
    pub name: String,
    pub host: String,
    pub time: String,
    pub listeners: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SourceCitation {
    pub name: String,
    pub period: String,
}

/// Result of loading the persisted document: either the file parsed
/// cleanly, or the fallback dataset was used and the reason says why.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(AudienceData),
    UsedDefault { data: AudienceData, reason: String },
}

impl LoadOutcome {
    pub fn into_data(self) -> AudienceData {
        match self {
            LoadOutcome::Loaded(data) => data,
            LoadOutcome::UsedDefault { data, .. } => data,
        }
    }
}

/// Load the persisted document from `path`. A missing, unreadable or
/// malformed file never errors out; the fallback dataset is used instead.
pub fn load_current_data(path: &Path) -> LoadOutcome {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            return LoadOutcome::UsedDefault {
                data: default_audience_data(),
                reason: format!("could not read {}: {}", path.display(), e),
            }
        }
    };

    match serde_json::from_str(&raw) {
        Ok(data) => LoadOutcome::Loaded(data),
        Err(e) => LoadOutcome::UsedDefault {
            data: default_audience_data(),
            reason: format!("invalid JSON in {}: {}", path.display(), e),
        },
    }
}

/// Write the document to `path` as pretty-printed JSON, overwriting any
/// prior content. Accented characters are stored literally, not escaped.
pub fn save_data(path: &Path, data: &AudienceData) -> Result<()> {
    let json = serde_json::to_string_pretty(data).context("Failed to serialize audience data")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Fallback dataset (Métridom wave, September-November 2025), also the
/// shape reference for the document.
pub fn default_audience_data() -> AudienceData {
    AudienceData {
        last_update: "2025-12-10".to_string(),
        period: "Septembre-Novembre 2025".to_string(),
        freedom1: StationFigures {
            pda: 33.5,
            audience: Some(177_600),
            evolution: -0.8,
            evolution_year: Some(-5.8),
        },
        freedom2: StationFigures {
            pda: 5.3,
            audience: None,
            evolution: 1.9,
            evolution_year: None,
        },
        rankings: vec![
            ranking("Free Dom 1", 33.5, -0.8),
            ranking("EXO FM", 11.3, 0.5),
            ranking("Réunion La 1ère", 10.1, -0.8),
            ranking("Chérie FM", 5.9, -0.4),
            ranking("Antenne Réunion Radio", 5.6, 2.0),
            ranking("Free Dom 2", 5.3, 1.9),
            ranking("NRJ Réunion", 4.3, -0.9),
        ],
        shows: vec![
            show("TRAFIC", "Bobby", "15h-19h", 45),
            show("DROIT DE PAROLE", "Mme Aude & Bobby", "17h-18h", 38),
            show("LA MATINALE", "Francky", "6h-9h", 52),
            show("CHALEUR TROPICALE", "Équipe", "20h-minuit", 35),
        ],
        sources: vec![
            SourceCitation {
                name: "Médiamétrie Métridom".to_string(),
                period: "Sept-Nov 2025".to_string(),
            },
            SourceCitation {
                name: "ACPM".to_string(),
                period: "Janvier 2026".to_string(),
            },
        ],
    }
}

fn ranking(name: &str, pda: f64, evolution: f64) -> RankingEntry {
    RankingEntry {
        name: name.to_string(),
        pda,
        evolution,
    }
}

fn show(name: &str, host: &str, time: &str, listeners: u32) -> Show {
    Show {
        name: name.to_string(),
        host: host.to_string(),
        time: time.to_string(),
        listeners,
    }
}
