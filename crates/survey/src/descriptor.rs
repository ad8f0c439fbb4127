use foundation::BodyId;
use serde::{Deserialize, Serialize};

use crate::grid::{GRID_HEIGHT, GRID_WIDTH, GridSurvey};
use crate::kinds::CoverageKinds;

/// Serializable form of a [`GridSurvey`], for saving and loading survey
/// snapshots as JSON.
///
/// Kept separate from the runtime type so the wire layout can stay stable
/// while the runtime representation evolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyDescriptor {
    pub body: u64,
    pub name: String,
    pub has_surface_model: bool,
    pub has_biome_map: bool,
    pub biome_count: u32,
    pub coverage: Vec<CoverageKinds>,
    pub heights: Vec<f64>,
    pub biomes: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    WrongCellCount { field: &'static str, got: usize },
}

impl std::fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DescriptorError::WrongCellCount { field, got } => {
                let want = GRID_WIDTH * GRID_HEIGHT;
                write!(f, "{field} has {got} cells, expected {want}")
            }
        }
    }
}

impl std::error::Error for DescriptorError {}

impl SurveyDescriptor {
    pub fn from_survey(survey: &GridSurvey, name: impl Into<String>) -> Self {
        let (coverage, heights, biomes) = survey.raw_parts();
        Self {
            body: survey.body_id().raw(),
            name: name.into(),
            has_surface_model: survey.has_surface_model,
            has_biome_map: survey.has_biome_map,
            biome_count: survey.biome_count(),
            coverage: coverage.to_vec(),
            heights: heights.to_vec(),
            biomes: biomes.to_vec(),
        }
    }

    pub fn into_survey(self) -> Result<GridSurvey, DescriptorError> {
        let want = GRID_WIDTH * GRID_HEIGHT;
        for (field, got) in [
            ("coverage", self.coverage.len()),
            ("heights", self.heights.len()),
            ("biomes", self.biomes.len()),
        ] {
            if got != want {
                return Err(DescriptorError::WrongCellCount { field, got });
            }
        }
        Ok(GridSurvey::from_raw_parts(
            BodyId::new(self.body),
            self.has_surface_model,
            self.has_biome_map,
            self.biome_count,
            self.coverage,
            self.heights,
            self.biomes,
        ))
    }
}

#[cfg(test)]
mod tests {
    use foundation::BodyId;
    use pretty_assertions::assert_eq;

    use super::{DescriptorError, SurveyDescriptor};
    use crate::grid::GridSurvey;
    use crate::kinds::CoverageKinds;
    use crate::source::SurveySource;

    #[test]
    fn survey_round_trips_through_descriptor() {
        let mut survey = GridSurvey::new(BodyId::new(3), 5);
        survey.mark_covered(12.0, -4.0, CoverageKinds::ALTIMETRY_HIRES);
        survey.set_height(12.0, -4.0, -250.0);
        survey.set_biome(12.0, -4.0, 2);

        let desc = SurveyDescriptor::from_survey(&survey, "demo");
        let json = serde_json::to_string(&desc).unwrap();
        let back: SurveyDescriptor = serde_json::from_str(&json).unwrap();
        let restored = back.into_survey().unwrap();
        assert_eq!(restored, survey);
        assert!(restored.is_covered(12.5, -3.5, CoverageKinds::ALTIMETRY));
    }

    #[test]
    fn truncated_descriptor_is_rejected() {
        let survey = GridSurvey::new(BodyId::new(3), 5);
        let mut desc = SurveyDescriptor::from_survey(&survey, "demo");
        desc.heights.truncate(10);
        assert_eq!(
            desc.into_survey(),
            Err(DescriptorError::WrongCellCount {
                field: "heights",
                got: 10
            })
        );
    }
}
