//! Main tier for series.
//!
//! Main cast are the people who keep showing up: enough episodes to clear
//! the configured bar, with a photo and a named first role.

use crate::config::SeriesFilterConfig;
use crate::traits::TierSelector;
use cast_model::{CastCredit, SeriesCastMember};

/// Admits regulars, capped at `top_cast_count`.
pub struct SeriesMainTier {
    minimum_episodes: u32,
    top_cast_count: usize,
}

impl SeriesMainTier {
    pub fn new(minimum_episodes: u32, top_cast_count: usize) -> Self {
        Self {
            minimum_episodes,
            top_cast_count,
        }
    }

    pub fn from_config(config: &SeriesFilterConfig) -> Self {
        Self::new(config.minimum_episodes, config.top_cast_count)
    }
}

impl TierSelector<SeriesCastMember> for SeriesMainTier {
    fn name(&self) -> &str {
        "SeriesMainTier"
    }

    fn admits(&self, member: &SeriesCastMember, _position: usize) -> bool {
        member.total_episode_count >= self.minimum_episodes
            && member.has_photo()
            && member.first_role_character().is_some()
    }

    fn limit(&self) -> Option<usize> {
        Some(self.top_cast_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cast_model::RoleCredit;

    fn member(episodes: u32, character: &str) -> SeriesCastMember {
        SeriesCastMember {
            id: 1,
            name: "Actor".to_string(),
            profile_path: Some("/a.jpg".to_string()),
            popularity: 0.0,
            roles: vec![RoleCredit {
                character: character.to_string(),
                episode_count: episodes,
            }],
            total_episode_count: episodes,
        }
    }

    #[test]
    fn test_episode_bar() {
        let tier = SeriesMainTier::new(8, 50);
        assert!(tier.admits(&member(8, "Lead"), 0));
        assert!(!tier.admits(&member(7, "Lead"), 0));
    }

    #[test]
    fn test_requires_named_first_role() {
        let tier = SeriesMainTier::new(2, 30);
        assert!(!tier.admits(&member(20, ""), 0));

        let mut no_roles = member(20, "Lead");
        no_roles.roles.clear();
        assert!(!tier.admits(&no_roles, 0));
    }

    #[test]
    fn test_requires_photo() {
        let tier = SeriesMainTier::new(2, 30);
        let mut faceless = member(20, "Lead");
        faceless.profile_path = None;
        assert!(!tier.admits(&faceless, 0));
    }
}
