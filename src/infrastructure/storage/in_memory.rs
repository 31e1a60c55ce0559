//! In-memory store emulating the relational `team` / `player` schema

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{DomainError, PlayerEntity, PlayerId, TeamEntity, TeamId};

#[derive(Debug, Default)]
struct Tables {
    teams: BTreeMap<TeamId, TeamEntity>,
    players: BTreeMap<PlayerId, PlayerEntity>,
    team_sequence: i64,
    player_sequence: i64,
}

/// Thread-safe in-memory store shared by the team and player repositories
///
/// Enforces the same constraints as the PostgreSQL schema: sequential
/// primary keys, unique names, the `player.team_id` foreign key and
/// `ON DELETE CASCADE`. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, DomainError> {
        self.tables
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, DomainError> {
        self.tables
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }

    // Teams

    pub fn save_team(&self, team: TeamEntity) -> Result<TeamEntity, DomainError> {
        let mut tables = self.write()?;

        let duplicate = tables
            .teams
            .values()
            .any(|t| t.team_name() == team.team_name() && t.id() != team.id());

        if duplicate {
            return Err(DomainError::conflict(format!(
                "Team '{}' already exists",
                team.team_name()
            )));
        }

        let id = match team.id() {
            Some(id) => {
                tables.team_sequence = tables.team_sequence.max(id.value());
                id
            }
            None => {
                tables.team_sequence += 1;
                TeamId::new(tables.team_sequence)
            }
        };

        let team = team.with_id(id);
        tables.teams.insert(id, team.clone());
        Ok(team)
    }

    pub fn delete_team(&self, id: &TeamId) -> Result<bool, DomainError> {
        let mut tables = self.write()?;

        if tables.teams.remove(id).is_none() {
            return Ok(false);
        }

        tables.players.retain(|_, p| p.team_id() != *id);
        Ok(true)
    }

    pub fn teams(&self) -> Result<Vec<TeamEntity>, DomainError> {
        Ok(self.read()?.teams.values().cloned().collect())
    }

    pub fn team(&self, id: &TeamId) -> Result<Option<TeamEntity>, DomainError> {
        Ok(self.read()?.teams.get(id).cloned())
    }

    pub fn team_by_name(&self, team_name: &str) -> Result<Option<TeamEntity>, DomainError> {
        Ok(self
            .read()?
            .teams
            .values()
            .find(|t| t.team_name() == team_name)
            .cloned())
    }

    // Players

    pub fn save_player(&self, player: PlayerEntity) -> Result<PlayerEntity, DomainError> {
        let mut tables = self.write()?;

        if !tables.teams.contains_key(&player.team_id()) {
            return Err(DomainError::integrity(format!(
                "Team {} referenced by player '{}' does not exist",
                player.team_id(),
                player.name()
            )));
        }

        let duplicate = tables
            .players
            .values()
            .any(|p| p.name() == player.name() && p.id() != player.id());

        if duplicate {
            return Err(DomainError::conflict(format!(
                "Player '{}' already exists",
                player.name()
            )));
        }

        let id = match player.id() {
            Some(id) => {
                tables.player_sequence = tables.player_sequence.max(id.value());
                id
            }
            None => {
                tables.player_sequence += 1;
                PlayerId::new(tables.player_sequence)
            }
        };

        let player = player.with_id(id);
        tables.players.insert(id, player.clone());
        Ok(player)
    }

    pub fn delete_player(&self, id: &PlayerId) -> Result<bool, DomainError> {
        Ok(self.write()?.players.remove(id).is_some())
    }

    pub fn players(&self) -> Result<Vec<PlayerEntity>, DomainError> {
        Ok(self.read()?.players.values().cloned().collect())
    }

    pub fn player(&self, id: &PlayerId) -> Result<Option<PlayerEntity>, DomainError> {
        Ok(self.read()?.players.get(id).cloned())
    }

    pub fn player_by_name(&self, name: &str) -> Result<Option<PlayerEntity>, DomainError> {
        Ok(self
            .read()?
            .players
            .values()
            .find(|p| p.name() == name)
            .cloned())
    }
}
