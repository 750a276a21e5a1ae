//! Learning roadmap milestones and progress summary.

use serde::{Deserialize, Serialize};

use crate::listings::parse_duration_weeks;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Completed,
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub status: MilestoneStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoadmapProgress {
    pub completed: usize,
    pub in_progress: usize,
    pub total_weeks: u32,
    pub completion_ratio: f32,
}

impl RoadmapProgress {
    pub fn from_items(items: &[RoadmapItem]) -> Self {
        let completed = items
            .iter()
            .filter(|item| item.status == MilestoneStatus::Completed)
            .count();
        let total_weeks = items
            .iter()
            .filter_map(|item| parse_duration_weeks(&item.duration).ok())
            .sum();
        let completion_ratio = if items.is_empty() {
            0.0
        } else {
            completed as f32 / items.len() as f32
        };

        Self {
            completed,
            in_progress: items.len() - completed,
            total_weeks,
            completion_ratio,
        }
    }
}

pub fn seed_roadmap() -> Vec<RoadmapItem> {
    vec![
        milestone(
            "1",
            "Fundamentos de Análise de Dados",
            "Aprenda os conceitos básicos de análise de dados e estatística",
            "4 semanas",
            &["Excel", "Estatística Básica", "SQL"],
            MilestoneStatus::Completed,
        ),
        milestone(
            "2",
            "Python para Dados",
            "Domine Python e bibliotecas essenciais como Pandas e NumPy",
            "8 semanas",
            &["Python", "Pandas", "NumPy"],
            MilestoneStatus::InProgress,
        ),
        milestone(
            "3",
            "Visualização de Dados",
            "Crie dashboards e visualizações impactantes",
            "6 semanas",
            &["PowerBI", "Tableau", "Data Visualization"],
            MilestoneStatus::InProgress,
        ),
    ]
}

fn milestone(
    id: &str,
    title: &str,
    description: &str,
    duration: &str,
    skills: &[&str],
    status: MilestoneStatus,
) -> RoadmapItem {
    RoadmapItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        status,
    }
}
