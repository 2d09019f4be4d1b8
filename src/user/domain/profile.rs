//! Fixed actor roles and the role-specific profiles that determine them.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two fixed actor roles.
///
/// Role is determined by the profile variant chosen at registration and
/// never changes afterwards; in particular it is never inferred from
/// email text or any other transient signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Posts tasks and selects freelancers.
    Client,
    /// Registers interest in or accepts tasks.
    Freelancer,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Freelancer => "freelancer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "client" => Ok(Self::Client),
            "freelancer" => Ok(Self::Freelancer),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Freelancer-only profile data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreelancerProfile {
    skills: Vec<String>,
    hourly_rate: Option<u32>,
    experience_years: Option<u32>,
}

impl FreelancerProfile {
    /// Creates an empty freelancer profile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            skills: Vec::new(),
            hourly_rate: None,
            experience_years: None,
        }
    }

    /// Sets the advertised skill set.
    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = String>) -> Self {
        self.skills = skills.into_iter().collect();
        self
    }

    /// Sets the hourly rate in whole currency units.
    #[must_use]
    pub const fn with_hourly_rate(mut self, rate: u32) -> Self {
        self.hourly_rate = Some(rate);
        self
    }

    /// Sets the years of experience.
    #[must_use]
    pub const fn with_experience_years(mut self, years: u32) -> Self {
        self.experience_years = Some(years);
        self
    }

    /// Returns the advertised skills.
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Returns the hourly rate, if set.
    #[must_use]
    pub const fn hourly_rate(&self) -> Option<u32> {
        self.hourly_rate
    }

    /// Returns the years of experience, if set.
    #[must_use]
    pub const fn experience_years(&self) -> Option<u32> {
        self.experience_years
    }
}

impl Default for FreelancerProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Client-only profile data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    company: Option<String>,
    industry: Option<String>,
}

impl ClientProfile {
    /// Creates an empty client profile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            company: None,
            industry: None,
        }
    }

    /// Sets the company name.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the industry.
    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Returns the company name, if set.
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Returns the industry, if set.
    #[must_use]
    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Role-specific profile attached to a user account.
///
/// The variant fixes the account's role for its whole lifetime, which
/// makes a role/profile mismatch unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum UserProfile {
    /// Profile for a task-posting client.
    Client(ClientProfile),
    /// Profile for a service-providing freelancer.
    Freelancer(FreelancerProfile),
}

impl UserProfile {
    /// Returns the role fixed by this profile.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Client(_) => Role::Client,
            Self::Freelancer(_) => Role::Freelancer,
        }
    }
}
