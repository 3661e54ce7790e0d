//! Relevance signal weights
//!
//! Every scoring signal the ranker can fire has a weight here. The defaults
//! are a fixed policy table tuned against real contact sets: current facts
//! outweigh historical facts, which outweigh derived tags. All weights are
//! plain additive points except `match_confidence_factor`, which multiplies
//! a contact's stored match confidence.

use serde::{Deserialize, Serialize};

/// Weights for travel-intent signals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TravelWeights {
    /// Destination matches the contact's current location
    pub current_location: f64,
    /// Destination matches the contact's hometown
    pub hometown: f64,
    /// Destination appears in work-history locations
    pub work_history: f64,
    /// Destination matches a location-category tag
    pub location_tag: f64,
}

impl Default for TravelWeights {
    fn default() -> Self {
        Self {
            current_location: 15.0,
            hometown: 12.0,
            work_history: 10.0,
            location_tag: 8.0,
        }
    }
}

/// Weights for job-search and company-intent signals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct JobWeights {
    /// Queried company matches the current employer
    pub current_company: f64,
    /// Per work-history record at the queried company
    pub history_company: f64,
    /// Queried company matches a professional tag
    pub professional_tag: f64,
}

impl Default for JobWeights {
    fn default() -> Self {
        Self {
            current_company: 20.0,
            history_company: 15.0,
            professional_tag: 12.0,
        }
    }
}

/// Weights for skill-help signals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkillWeights {
    /// Per explicit skill matching the query
    pub skill: f64,
    /// Queried skill appears in the job title
    pub job_title: f64,
    /// Per skill-category tag matching the query
    pub skill_tag: f64,
}

impl Default for SkillWeights {
    fn default() -> Self {
        Self {
            skill: 10.0,
            job_title: 12.0,
            skill_tag: 8.0,
        }
    }
}

/// Weights for networking signals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkingWeights {
    /// More than five mutual friends
    pub mutual_friends: f64,
    /// More than five hundred connections
    pub connections: f64,
    /// More than three logged interactions
    pub interactions: f64,
}

impl Default for NetworkingWeights {
    fn default() -> Self {
        Self {
            mutual_friends: 5.0,
            connections: 3.0,
            interactions: 4.0,
        }
    }
}

/// Weights for interest signals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InterestWeights {
    /// Per interest or hobby matching the query
    pub shared: f64,
    /// Queried interest matches an interest tag
    pub tag: f64,
}

impl Default for InterestWeights {
    fn default() -> Self {
        Self {
            shared: 6.0,
            tag: 4.0,
        }
    }
}

/// Weights for general free-text matching
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralWeights {
    pub name: f64,
    pub company: f64,
    pub job_title: f64,
    /// Per tag whose value matches the query
    pub tag: f64,
}

impl Default for GeneralWeights {
    fn default() -> Self {
        Self {
            name: 10.0,
            company: 8.0,
            job_title: 7.0,
            tag: 5.0,
        }
    }
}

/// Weights for structured filter search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterWeights {
    /// Free text over the contact name
    pub text_name: f64,
    /// Free text over the email address
    pub text_email: f64,
    /// Free text over the company
    pub text_company: f64,
    /// Free text over the job title
    pub text_title: f64,
    /// Company filter matches the employer
    pub company: f64,
    /// Function filter matches title or job function
    pub function_title: f64,
    /// Function filter matches an industry tag
    pub function_industry_tag: f64,
    /// Location filter matches the contact location
    pub location: f64,
}

impl Default for FilterWeights {
    fn default() -> Self {
        Self {
            text_name: 10.0,
            text_email: 8.0,
            text_company: 7.0,
            text_title: 6.0,
            company: 15.0,
            function_title: 12.0,
            function_industry_tag: 8.0,
            location: 10.0,
        }
    }
}

/// Cross-cutting boosts applied after intent scoring
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoostWeights {
    /// Contact has a linked Facebook profile
    pub facebook_profile: f64,
    /// Contact has a linked LinkedIn profile
    pub linkedin_profile: f64,
    /// Multiplied by the contact's stored match confidence
    pub match_confidence_factor: f64,
    /// Interacted with inside the recency window
    pub recent_interaction: f64,
    /// Enriched inside the recency window
    pub recent_enrichment: f64,
}

impl Default for BoostWeights {
    fn default() -> Self {
        Self {
            facebook_profile: 2.0,
            linkedin_profile: 2.0,
            match_confidence_factor: 3.0,
            recent_interaction: 2.0,
            recent_enrichment: 2.0,
        }
    }
}

/// The full weight table consumed by the ranker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RankingWeights {
    pub travel: TravelWeights,
    pub job: JobWeights,
    pub skill: SkillWeights,
    pub networking: NetworkingWeights,
    /// Current job function matches the queried function
    pub function_role: f64,
    /// Current location matches the queried city
    pub location_match: f64,
    pub interest: InterestWeights,
    pub general: GeneralWeights,
    pub filter: FilterWeights,
    pub boost: BoostWeights,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            travel: TravelWeights::default(),
            job: JobWeights::default(),
            skill: SkillWeights::default(),
            networking: NetworkingWeights::default(),
            function_role: 10.0,
            location_match: 8.0,
            interest: InterestWeights::default(),
            general: GeneralWeights::default(),
            filter: FilterWeights::default(),
            boost: BoostWeights::default(),
        }
    }
}

impl RankingWeights {
    /// Every weight must be a finite non-negative number
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in self.named_values() {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "ranking weight '{}' must be a non-negative number, got {}",
                    name, value
                ));
            }
        }
        Ok(())
    }

    fn named_values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("travel.current_location", self.travel.current_location),
            ("travel.hometown", self.travel.hometown),
            ("travel.work_history", self.travel.work_history),
            ("travel.location_tag", self.travel.location_tag),
            ("job.current_company", self.job.current_company),
            ("job.history_company", self.job.history_company),
            ("job.professional_tag", self.job.professional_tag),
            ("skill.skill", self.skill.skill),
            ("skill.job_title", self.skill.job_title),
            ("skill.skill_tag", self.skill.skill_tag),
            ("networking.mutual_friends", self.networking.mutual_friends),
            ("networking.connections", self.networking.connections),
            ("networking.interactions", self.networking.interactions),
            ("function_role", self.function_role),
            ("location_match", self.location_match),
            ("interest.shared", self.interest.shared),
            ("interest.tag", self.interest.tag),
            ("general.name", self.general.name),
            ("general.company", self.general.company),
            ("general.job_title", self.general.job_title),
            ("general.tag", self.general.tag),
            ("filter.text_name", self.filter.text_name),
            ("filter.text_email", self.filter.text_email),
            ("filter.text_company", self.filter.text_company),
            ("filter.text_title", self.filter.text_title),
            ("filter.company", self.filter.company),
            ("filter.function_title", self.filter.function_title),
            ("filter.function_industry_tag", self.filter.function_industry_tag),
            ("filter.location", self.filter.location),
            ("boost.facebook_profile", self.boost.facebook_profile),
            ("boost.linkedin_profile", self.boost.linkedin_profile),
            (
                "boost.match_confidence_factor",
                self.boost.match_confidence_factor,
            ),
            ("boost.recent_interaction", self.boost.recent_interaction),
            ("boost.recent_enrichment", self.boost.recent_enrichment),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(RankingWeights::default().validate().is_ok());
    }

    #[test]
    fn test_current_facts_outweigh_history_and_tags() {
        let weights = RankingWeights::default();
        assert!(weights.travel.current_location > weights.travel.hometown);
        assert!(weights.travel.hometown > weights.travel.work_history);
        assert!(weights.travel.work_history > weights.travel.location_tag);
        assert!(weights.job.current_company > weights.job.history_company);
        assert!(weights.job.history_company > weights.job.professional_tag);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = RankingWeights {
            general: GeneralWeights {
                name: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(err.contains("general.name"));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let weights = RankingWeights {
            boost: BoostWeights {
                recent_interaction: f64::NAN,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(weights.validate().is_err());
    }
}
