//! Career insights derived from a member's skills and the skills the job market asks for.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GAP_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Trend,
    Gap,
    Recommendation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

/// Minimal profile slice needed to generate insights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub target_role: String,
}

/// Market skills the member lacks, in market order, capped at `limit`.
///
/// Skill names compare case-insensitively.
pub fn skill_gaps(profile_skills: &[String], market_demand: &[String], limit: usize) -> Vec<String> {
    let owned: Vec<String> = profile_skills.iter().map(|skill| skill.to_lowercase()).collect();
    market_demand
        .iter()
        .filter(|skill| !owned.contains(&skill.to_lowercase()))
        .take(limit)
        .cloned()
        .collect()
}

/// Produce the trend, gap, and recommendation cards shown on the dashboard.
pub fn generate_insights(request: &InsightRequest, market_demand: &[String]) -> Vec<Insight> {
    let role = if request.target_role.trim().is_empty() {
        "seu cargo desejado"
    } else {
        request.target_role.trim()
    };

    let gaps = skill_gaps(&request.skills, market_demand, DEFAULT_GAP_LIMIT);
    let gap_description = if gaps.is_empty() {
        format!("Seu perfil já cobre as habilidades mais pedidas para {role}.")
    } else {
        format!(
            "Para alcançar {role}, desenvolva {} e aumente seu match nas vagas de interesse.",
            gaps.join(", ")
        )
    };

    let anchor = request
        .skills
        .first()
        .map(String::as_str)
        .unwrap_or("desenvolvimento");

    vec![
        Insight {
            kind: InsightKind::Trend,
            title: "Tendência de Mercado".to_string(),
            description: format!(
                "Profissionais com habilidades em {} estão em alta demanda.",
                market_demand
                    .first()
                    .map(String::as_str)
                    .unwrap_or("dados e IA")
            ),
        },
        Insight {
            kind: InsightKind::Gap,
            title: "Suas Lacunas de Habilidades".to_string(),
            description: gap_description,
        },
        Insight {
            kind: InsightKind::Recommendation,
            title: "Recomendação IA".to_string(),
            description: format!(
                "Combine cursos práticos em {anchor} com suas habilidades atuais para abrir novas oportunidades."
            ),
        },
    ]
}
