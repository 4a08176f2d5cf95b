//! Saved report list
//!
//! Storage is a flat list behind [`ReportStore`]; the operations here only
//! ever load the whole list and save it back.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::PoisonError;

use chrono::Local;
use chrono::NaiveDate;
use chrono::TimeZone;
use tracing::debug;
use tracing::info;

use crate::models::Report;
use crate::pipeline::ReportSession;
use crate::MoodLensError;
use crate::Result;

pub trait ReportStore {
    fn load_all(&self) -> Result<Vec<Report>>;
    fn save_all(&self, reports: &[Report]) -> Result<()>;
}

/// JSON array on disk. A missing file reads as an empty list.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Report>> {
        if !self.path.exists() {
            debug!("No report file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let reports: Vec<Report> = serde_json::from_str(&content)?;
        debug!("Loaded {} reports from {}", reports.len(), self.path.display());
        Ok(reports)
    }

    fn save_all(&self, reports: &[Report]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(reports)?;
        std::fs::write(&self.path, content)?;
        debug!("Saved {} reports to {}", reports.len(), self.path.display());
        Ok(())
    }
}

/// In-process store, mostly for tests and one-shot CLI runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    reports: Mutex<Vec<Report>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Report>> {
        Ok(self.reports.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn save_all(&self, reports: &[Report]) -> Result<()> {
        *self.reports.lock().unwrap_or_else(PoisonError::into_inner) = reports.to_vec();
        Ok(())
    }
}

/// Assign `episode_number` within each local calendar date
pub fn renumber_episodes(reports: &mut [Report]) -> bool {
    renumber_episodes_in(reports, &Local)
}

/// Group reports by calendar date in `tz`. Dates holding more than one report
/// number them 1..n by timestamp; a lone report has no number. Returns
/// whether any report changed.
pub fn renumber_episodes_in<Tz: TimeZone>(reports: &mut [Report], tz: &Tz) -> bool {
    let mut by_date: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
    for (index, report) in reports.iter().enumerate() {
        by_date
            .entry(report.date.with_timezone(tz).date_naive())
            .or_default()
            .push(index);
    }

    let mut changed = false;
    for indices in by_date.values_mut() {
        indices.sort_by_key(|&i| reports[i].date);
        let numbered = indices.len() > 1;
        for (rank, &i) in indices.iter().enumerate() {
            let expected = numbered.then_some(rank as u32 + 1);
            if reports[i].episode_number != expected {
                reports[i].episode_number = expected;
                changed = true;
            }
        }
    }
    changed
}

pub fn saved_count(store: &dyn ReportStore) -> Result<usize> {
    Ok(store.load_all()?.len())
}

/// Append a report and renumber. Returns the report as stored.
pub fn save_report(store: &dyn ReportStore, report: Report) -> Result<Report> {
    let mut reports = store.load_all()?;
    let id = report.id.clone();
    reports.retain(|r| r.id != id);
    reports.push(report);
    renumber_episodes(&mut reports);
    store.save_all(&reports)?;

    info!("Saved report {} ({} total)", id, reports.len());
    reports
        .into_iter()
        .find(|r| r.id == id)
        .ok_or(MoodLensError::ReportNotFound(id))
}

pub fn delete_report(store: &dyn ReportStore, id: &str) -> Result<()> {
    let mut reports = store.load_all()?;
    let before = reports.len();
    reports.retain(|r| r.id != id);
    if reports.len() == before {
        return Err(MoodLensError::ReportNotFound(id.to_string()));
    }
    renumber_episodes(&mut reports);
    store.save_all(&reports)?;

    info!("Deleted report {}", id);
    Ok(())
}

pub fn find_report(store: &dyn ReportStore, id: &str) -> Result<Report> {
    store
        .load_all()?
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| MoodLensError::ReportNotFound(id.to_string()))
}

/// Soundtrack sessions on disk, a JSON object keyed by conversation
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load_all(&self) -> Result<HashMap<String, ReportSession>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Session for `key`, fresh when none was saved
    pub fn load(&self, key: &str) -> Result<ReportSession> {
        Ok(self.load_all()?.remove(key).unwrap_or_default())
    }

    pub fn save(&self, key: &str, session: &ReportSession) -> Result<()> {
        let mut sessions = self.load_all()?;
        sessions.insert(key.to_string(), session.clone());
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&sessions)?)?;
        debug!("Saved session {} to {}", key, self.path.display());
        Ok(())
    }
}
