use super::types::{Scenario, ScenarioId, Step};

pub const ML_PIPELINE: Scenario = Scenario {
    id: ScenarioId::MlPipeline,
    banner: "🤖 Creating ML Pipeline with Specialized Team",
    steps: &[
        Step::new(
            "Initialize ML team",
            "./scripts/spawn-team.sh ml-team \"Recommendation system\"",
        ),
        Step::new(
            "Research and design",
            "npx claude-flow sparc run spec-pseudocode \"User recommendation ML model\"",
        ),
        Step::new(
            "Implementation",
            "npx claude-flow sparc run architect \"ML pipeline architecture\"",
        ),
        Step::new(
            "Training and evaluation",
            "npx claude-flow sparc tdd \"Model training pipeline\"",
        ),
    ],
    closing: &["✅ ML Pipeline workflow defined"],
};

pub const SIMPLE_API: Scenario = Scenario {
    id: ScenarioId::SimpleApi,
    banner: "🚀 Creating Simple API with Agent Team",
    steps: &[
        Step::new(
            "Initialize team",
            "./scripts/spawn-team.sh api-team \"Simple REST API\"",
        ),
        Step::new(
            "Use SPARC methodology",
            "npx claude-flow sparc tdd \"User authentication API\"",
        ),
        Step::new("Monitor progress", "npx claude-flow swarm status"),
    ],
    closing: &[
        "✅ Example workflow defined",
        "Run the commands above to see the ecosystem in action!",
    ],
};

pub fn scenario(id: ScenarioId) -> &'static Scenario {
    match id {
        ScenarioId::MlPipeline => &ML_PIPELINE,
        ScenarioId::SimpleApi => &SIMPLE_API,
    }
}

pub fn all() -> impl Iterator<Item = &'static Scenario> {
    ScenarioId::ALL.into_iter().map(scenario)
}
