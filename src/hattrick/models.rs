//! Typed CHPP documents.
//!
//! Every CHPP response is a `<HattrickData>` root with the same header
//! elements followed by file-specific content. Elements not modelled here are
//! ignored during decoding.

use serde::{Deserialize, Serialize};

/// Header elements shared by every CHPP file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HattrickEnvelope {
    pub file_name: String,
    pub version: String,
    #[serde(rename = "UserID")]
    pub user_id: u64,
    pub fetched_date: String,
}

/// `matchdetails` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchDetailsData {
    pub file_name: String,
    pub version: String,
    #[serde(rename = "UserID")]
    pub user_id: u64,
    pub fetched_date: String,
    #[serde(rename = "Match")]
    pub match_details: MatchDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchDetails {
    #[serde(rename = "MatchID")]
    pub match_id: u64,
    #[serde(default)]
    pub match_type: u32,
    pub match_date: String,
    #[serde(default)]
    pub finished_date: Option<String>,
    pub home_team: HomeTeam,
    pub away_team: AwayTeam,
    #[serde(default)]
    pub arena: Option<Arena>,
}

impl MatchDetails {
    /// Result as `home-away`.
    pub fn score(&self) -> String {
        format!("{}-{}", self.home_team.goals, self.away_team.goals)
    }

    pub fn is_finished(&self) -> bool {
        self.finished_date.as_deref().is_some_and(|d| !d.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeTeam {
    #[serde(rename = "HomeTeamID")]
    pub team_id: u64,
    #[serde(rename = "HomeTeamName")]
    pub team_name: String,
    #[serde(rename = "HomeGoals", default)]
    pub goals: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwayTeam {
    #[serde(rename = "AwayTeamID")]
    pub team_id: u64,
    #[serde(rename = "AwayTeamName")]
    pub team_name: String,
    #[serde(rename = "AwayGoals", default)]
    pub goals: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Arena {
    #[serde(rename = "ArenaID")]
    pub arena_id: u64,
    pub arena_name: String,
    #[serde(default)]
    pub sold_total: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hattrick::decode_xml;

    const MATCH_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<HattrickData>
  <FileName>matchdetails.xml</FileName>
  <Version>3.1</Version>
  <UserID>13537902</UserID>
  <FetchedDate>2024-01-15 10:00:00</FetchedDate>
  <UserSupporterTier>none</UserSupporterTier>
  <Match>
    <MatchID>700000001</MatchID>
    <MatchType>1</MatchType>
    <MatchDate>2024-01-13 19:00:00</MatchDate>
    <FinishedDate>2024-01-13 20:52:00</FinishedDate>
    <HomeTeam>
      <HomeTeamID>1001</HomeTeamID>
      <HomeTeamName>Universidad de Chile</HomeTeamName>
      <HomeGoals>2</HomeGoals>
    </HomeTeam>
    <AwayTeam>
      <AwayTeamID>2002</AwayTeamID>
      <AwayTeamName>Colo Colo</AwayTeamName>
      <AwayGoals>1</AwayGoals>
    </AwayTeam>
    <Arena>
      <ArenaID>4242</ArenaID>
      <ArenaName>Estadio Nacional</ArenaName>
      <WeatherID>3</WeatherID>
      <SoldTotal>48211</SoldTotal>
    </Arena>
  </Match>
</HattrickData>"#;

    #[test]
    fn test_decode_match_details() {
        let data: MatchDetailsData = decode_xml(MATCH_XML.as_bytes()).unwrap();

        assert_eq!(data.file_name, "matchdetails.xml");
        assert_eq!(data.user_id, 13537902);
        let details = &data.match_details;
        assert_eq!(details.match_id, 700000001);
        assert_eq!(details.home_team.team_name, "Universidad de Chile");
        assert_eq!(details.away_team.team_id, 2002);
        assert_eq!(details.score(), "2-1");
        assert!(details.is_finished());
        let arena = details.arena.as_ref().unwrap();
        assert_eq!(arena.arena_name, "Estadio Nacional");
        assert_eq!(arena.sold_total, Some(48211));
    }

    #[test]
    fn test_decode_envelope_from_any_file() {
        let envelope: HattrickEnvelope = decode_xml(MATCH_XML.as_bytes()).unwrap();
        assert_eq!(
            envelope,
            HattrickEnvelope {
                file_name: "matchdetails.xml".to_string(),
                version: "3.1".to_string(),
                user_id: 13537902,
                fetched_date: "2024-01-15 10:00:00".to_string(),
            }
        );
    }

    #[test]
    fn test_unplayed_match_without_arena() {
        let xml = r#"<HattrickData>
  <FileName>matchdetails.xml</FileName>
  <Version>3.1</Version>
  <UserID>1</UserID>
  <FetchedDate>2024-01-15 10:00:00</FetchedDate>
  <Match>
    <MatchID>5</MatchID>
    <MatchDate>2024-01-20 19:00:00</MatchDate>
    <HomeTeam><HomeTeamID>1</HomeTeamID><HomeTeamName>A</HomeTeamName></HomeTeam>
    <AwayTeam><AwayTeamID>2</AwayTeamID><AwayTeamName>B</AwayTeamName></AwayTeam>
  </Match>
</HattrickData>"#;

        let data: MatchDetailsData = decode_xml(xml.as_bytes()).unwrap();
        assert!(!data.match_details.is_finished());
        assert_eq!(data.match_details.arena, None);
        assert_eq!(data.match_details.score(), "0-0");
    }
}
