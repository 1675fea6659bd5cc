//! The league dataset: everything the views are computed from.

use std::collections::HashSet;

use thiserror::Error;
use tracing::info;

use crate::data;
use crate::models::{
    AllTimeRecord, ChampionshipRecord, GameResult, MatchupRecord, RawMatchupRecord,
};

use super::{DatasetFile, JsonlReader, JsonlWriter, StorageConfig, StorageError};

/// Dataset invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("Duplicate championship year: {0}")]
    DuplicateYear(i32),

    #[error("Manager {0} is paired against themself")]
    SelfMatchup(String),

    #[error("Duplicate matchup between {0} and {1}")]
    DuplicatePair(String, String),
}

/// In-memory league data.
#[derive(Debug, Clone, Default)]
pub struct LeagueDataset {
    pub championships: Vec<ChampionshipRecord>,
    pub matchups: Vec<MatchupRecord>,
    pub games: Vec<GameResult>,
    pub all_time_records: Vec<AllTimeRecord>,
}

impl LeagueDataset {
    /// Built-in data only, with no matchups or games.
    pub fn builtin() -> Self {
        Self {
            championships: data::championships(),
            matchups: Vec::new(),
            games: Vec::new(),
            all_time_records: data::all_time_records(),
        }
    }

    /// Load from the data directory, falling back to built-in data for
    /// championships and record boards when their files are absent.
    pub fn load(config: &StorageConfig) -> Result<Self, StorageError> {
        let championships =
            JsonlReader::<ChampionshipRecord>::for_dataset(config, DatasetFile::Championships)
                .read_or(data::championships)?;

        let matchups: Vec<MatchupRecord> =
            JsonlReader::<RawMatchupRecord>::for_dataset(config, DatasetFile::HeadToHead)
                .read_all()?
                .into_iter()
                .map(RawMatchupRecord::normalize)
                .collect();

        let games = JsonlReader::<GameResult>::for_dataset(config, DatasetFile::Games).read_all()?;

        let all_time_records =
            JsonlReader::<AllTimeRecord>::for_dataset(config, DatasetFile::AllTimeRecords)
                .read_or(data::all_time_records)?;

        info!(
            championships = championships.len(),
            matchups = matchups.len(),
            games = games.len(),
            record_boards = all_time_records.len(),
            "Loaded league dataset from {:?}",
            config.data_dir
        );

        Ok(Self {
            championships,
            matchups,
            games,
            all_time_records,
        })
    }

    /// Write every part of the dataset to the data directory.
    ///
    /// Each file is replaced, so an empty part leaves an empty file and a
    /// later [`LeagueDataset::load`] reads back exactly this dataset.
    pub fn export(&self, config: &StorageConfig) -> Result<usize, StorageError> {
        let mut written = 0;
        written += JsonlWriter::for_dataset(config, DatasetFile::Championships)
            .write_all(&self.championships)?;
        written += JsonlWriter::for_dataset(config, DatasetFile::AllTimeRecords)
            .write_all(&self.all_time_records)?;
        written +=
            JsonlWriter::for_dataset(config, DatasetFile::HeadToHead).write_all(&self.matchups)?;
        written += JsonlWriter::for_dataset(config, DatasetFile::Games).write_all(&self.games)?;
        Ok(written)
    }

    /// Every invariant violation in the dataset.
    ///
    /// Championship years must be unique, and each unordered pair of
    /// distinct managers may appear at most once in the matchups.
    pub fn validate(&self) -> Vec<DataError> {
        let mut errors = Vec::new();

        let mut years = HashSet::new();
        for record in &self.championships {
            if !years.insert(record.year) {
                errors.push(DataError::DuplicateYear(record.year));
            }
        }

        let mut pairs = HashSet::new();
        for m in &self.matchups {
            if m.manager1 == m.manager2 {
                errors.push(DataError::SelfMatchup(m.manager1.clone()));
                continue;
            }
            let key = if m.manager1 < m.manager2 {
                (m.manager1.as_str(), m.manager2.as_str())
            } else {
                (m.manager2.as_str(), m.manager1.as_str())
            };
            if !pairs.insert(key) {
                errors.push(DataError::DuplicatePair(
                    m.manager1.clone(),
                    m.manager2.clone(),
                ));
            }
        }

        errors
    }

    /// Distinct manager names across every championship placement and
    /// matchup, sorted by name.
    pub fn managers(&self) -> Vec<String> {
        let mut names: HashSet<&str> = HashSet::new();
        for r in &self.championships {
            names.extend(
                [
                    &r.champion,
                    &r.runner_up,
                    &r.third_place,
                    &r.regular_season_champ,
                    &r.other_division_champ,
                    &r.regular_season_most_points,
                ]
                .into_iter()
                .filter_map(|n| n.as_deref()),
            );
        }
        for m in &self.matchups {
            names.insert(&m.manager1);
            names.insert(&m.manager2);
        }

        let mut managers: Vec<String> = names.into_iter().map(str::to_string).collect();
        managers.sort();
        managers
    }
}
