use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub job: String,
    pub department: Option<String>,
}

/// Cast and crew in provider order. Order matters: role lookups are first-match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

impl Credits {
    /// First crew entry whose job is one of `jobs`, by provider order.
    pub fn first_with_job(&self, jobs: &[&str]) -> Option<&CrewMember> {
        self.crew
            .iter()
            .find(|member| jobs.contains(&member.job.as_str()))
    }
}
