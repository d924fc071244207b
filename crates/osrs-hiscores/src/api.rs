//! High-level hiscores API.
//!
//! `HiscoresApi::get` covers the common case in one call. Fetching and
//! parsing stay separate steps: `PlayerHiscores` records what has been done,
//! and parsing without fetched data is an `InvalidState` error.

use crate::classify::classify;
use crate::client::HiscoresClient;
use crate::error::{HiscoresError, HiscoresResult};
use crate::snapshot::StatsSnapshot;
use crate::types::RawHiscores;
use osrs_core::{GameMode, ModeFlags};

/// Options for `HiscoresApi::get`.
#[derive(Debug, Clone, Copy)]
pub struct GetOptions {
    /// Leaderboard selection.
    pub modes: ModeFlags,
    /// Fetch the raw document. Default: true.
    pub fetch: bool,
    /// Classify the raw document. Default: true.
    pub parse: bool,
}

impl Default for GetOptions {
    fn default() -> Self {
        Self {
            modes: ModeFlags::default(),
            fetch: true,
            parse: true,
        }
    }
}

impl GetOptions {
    /// Fetch and parse on the given leaderboard.
    pub fn mode(mode: GameMode) -> Self {
        Self {
            modes: mode.into(),
            ..Self::default()
        }
    }

    /// Fetch without parsing.
    pub fn fetch_only(modes: ModeFlags) -> Self {
        Self {
            modes,
            fetch: true,
            parse: false,
        }
    }
}

/// Hiscores of a single player.
#[derive(Debug, Clone)]
pub struct PlayerHiscores {
    username: String,
    mode: GameMode,
    raw: Option<RawHiscores>,
    stats: Option<StatsSnapshot>,
}

impl PlayerHiscores {
    /// A record with nothing fetched yet.
    pub fn new(username: impl Into<String>, mode: GameMode) -> Self {
        Self {
            username: username.into(),
            mode,
            raw: None,
            stats: None,
        }
    }

    /// A record around an already-fetched document.
    pub fn from_raw(username: impl Into<String>, mode: GameMode, raw: RawHiscores) -> Self {
        let mut player = Self::new(username, mode);
        player.set_raw(raw);
        player
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn raw(&self) -> Option<&RawHiscores> {
        self.raw.as_ref()
    }

    pub fn is_fetched(&self) -> bool {
        self.raw.is_some()
    }

    pub fn is_parsed(&self) -> bool {
        self.stats.is_some()
    }

    /// Replace the raw document. Any previous classification is dropped.
    pub fn set_raw(&mut self, raw: RawHiscores) {
        self.raw = Some(raw);
        self.stats = None;
    }

    /// Classify the raw document, replacing any previous snapshot.
    pub fn parse(&mut self) -> HiscoresResult<&StatsSnapshot> {
        let raw = self.raw.as_ref().ok_or_else(|| {
            HiscoresError::InvalidState(format!(
                "no hiscores fetched for '{}'; fetch before parsing",
                self.username
            ))
        })?;
        let snapshot = classify(raw);
        Ok(self.stats.insert(snapshot))
    }

    /// The classified snapshot.
    pub fn stats(&self) -> HiscoresResult<&StatsSnapshot> {
        self.stats.as_ref().ok_or_else(|| {
            HiscoresError::InvalidState(format!(
                "hiscores for '{}' have not been parsed",
                self.username
            ))
        })
    }

    /// Consume the record, returning the snapshot.
    pub fn into_stats(self) -> HiscoresResult<StatsSnapshot> {
        let username = self.username;
        self.stats.ok_or_else(|| {
            HiscoresError::InvalidState(format!("hiscores for '{username}' have not been parsed"))
        })
    }
}

/// Convenience wrapper around `HiscoresClient` and `classify`.
pub struct HiscoresApi {
    client: HiscoresClient,
}

impl HiscoresApi {
    pub fn new(client: HiscoresClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &HiscoresClient {
        &self.client
    }

    /// Fetch the raw document only.
    pub async fn fetch(&self, username: &str, modes: ModeFlags) -> HiscoresResult<RawHiscores> {
        self.client.fetch(username, modes.resolve()).await
    }

    /// Classify a raw document only.
    pub fn parse(&self, raw: &RawHiscores) -> StatsSnapshot {
        classify(raw)
    }

    /// Create a player record and optionally fetch and parse it.
    pub async fn get(&self, username: &str, options: GetOptions) -> HiscoresResult<PlayerHiscores> {
        let mode = options.modes.resolve();
        let mut player = PlayerHiscores::new(username, mode);
        if options.fetch {
            let raw = self.client.fetch(username, mode).await?;
            player.set_raw(raw);
        }
        if options.parse {
            player.parse()?;
        }
        Ok(player)
    }

    /// Fetch and classify in one call.
    pub async fn snapshot(&self, username: &str, modes: ModeFlags) -> HiscoresResult<StatsSnapshot> {
        let raw = self.fetch(username, modes).await?;
        Ok(classify(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivityRow;
    use osrs_core::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    const BASE: &str = "https://hiscores.test/m=hiscore_oldschool";

    fn api_with(mock: &Arc<MockTransport>) -> HiscoresApi {
        HiscoresApi::new(HiscoresClient::with_transport(BASE, mock.clone()))
    }

    fn fixture_json() -> serde_json::Value {
        json!({
            "name": "FixtureUser",
            "skills": [
                {"id": 0, "name": "Overall", "rank": 1, "level": 99, "xp": 123},
                {"id": 1, "name": "Attack", "rank": 2, "level": 99, "xp": 13034431}
            ],
            "activities": [
                {"id": 0, "name": "League Points", "rank": -1, "score": 10},
                {"id": 7, "name": "Clue Scrolls (all)", "rank": 5, "score": 42},
                {"id": 10, "name": "Bounty Hunter - Hunter", "rank": -1, "score": 3},
                {"id": 19, "name": "Collections Logged", "rank": -1, "score": 0},
                {"id": 87, "name": "Zulrah", "rank": 100, "score": 55}
            ]
        })
    }

    #[test]
    fn test_parse_before_fetch_is_invalid_state() {
        let mut player = PlayerHiscores::new("FixtureUser", GameMode::Normal);
        assert!(matches!(player.parse(), Err(HiscoresError::InvalidState(_))));
        assert!(matches!(player.stats(), Err(HiscoresError::InvalidState(_))));
    }

    #[test]
    fn test_set_raw_drops_previous_stats() {
        let raw = RawHiscores {
            activities: vec![ActivityRow::new("Zulrah", 1, 5)],
            ..Default::default()
        };
        let mut player = PlayerHiscores::from_raw("p", GameMode::Normal, raw);
        player.parse().unwrap();
        assert!(player.is_parsed());

        player.set_raw(RawHiscores::default());
        assert!(!player.is_parsed());
        assert!(player.parse().unwrap().bosses().is_empty());
    }

    #[tokio::test]
    async fn test_get_fetches_and_parses() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(format!("{BASE}/index_lite.json"), fixture_json());

        let player = api_with(&mock)
            .get("FixtureUser", GetOptions::default())
            .await
            .unwrap();
        let stats = player.stats().unwrap();

        assert_eq!(stats.skill_level("attack").unwrap(), Some(99));
        assert_eq!(stats.clue_score("clue_scrolls_all").unwrap(), Some(42));
        assert_eq!(stats.pvp_score("bounty_hunter_hunter").unwrap(), Some(3));
        assert_eq!(stats.boss_score("zulrah").unwrap(), Some(55));
    }

    #[tokio::test]
    async fn test_get_fetch_only_then_parse() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(format!("{BASE}_deadman/index_lite.json"), fixture_json());

        let flags = ModeFlags {
            deadman: true,
            ironman: true,
            ..Default::default()
        };
        let mut player = api_with(&mock)
            .get("FixtureUser", GetOptions::fetch_only(flags))
            .await
            .unwrap();
        assert_eq!(player.mode(), GameMode::Deadman);
        assert!(player.is_fetched());
        assert!(!player.is_parsed());

        let stats = player.parse().unwrap();
        assert_eq!(stats.activity_score("league_points").unwrap(), Some(10));
    }

    #[tokio::test]
    async fn test_get_parse_without_fetch_fails() {
        let mock = Arc::new(MockTransport::new());
        let options = GetOptions {
            fetch: false,
            ..Default::default()
        };
        let err = api_with(&mock).get("FixtureUser", options).await.unwrap_err();
        assert!(matches!(err, HiscoresError::InvalidState(_)));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_in_one_call() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(format!("{BASE}_ultimate/index_lite.json"), fixture_json());

        let stats = api_with(&mock)
            .snapshot("FixtureUser", GameMode::Ultimate.into())
            .await
            .unwrap();
        assert_eq!(stats.skill_order(), &["overall", "attack"]);
    }
}
