// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// Runs the full pipeline for one employee:
//
//   Step 1: Validate input domains      (Layer 4 - data)
//   Step 2: Encode + assemble 1×19 row  (Layer 4 - data)
//   Step 3: Scale                       (Layer 5 - ml)
//   Step 4: Classify                    (Layer 5 - ml)
//
// Evaluation is synchronous and runs to completion or to the
// first error. Every error is a typed PipelineError; the CLI
// turns it into the one user-facing message.

use crate::application::context::InferenceContext;
use crate::domain::employee::EmployeeRecord;
use crate::domain::error::PipelineResult;
use crate::domain::features::RawValue;
use crate::domain::prediction::AttritionPrediction;

pub struct PredictUseCase<'a> {
    ctx: &'a InferenceContext,
}

impl<'a> PredictUseCase<'a> {
    pub fn new(ctx: &'a InferenceContext) -> Self {
        Self { ctx }
    }

    /// Predict attrition for a typed record
    pub fn execute(&self, record: &EmployeeRecord) -> PipelineResult<AttritionPrediction> {
        self.ctx.validator().validate_record(record)?;
        let features = self.ctx.assembler().assemble_record(record)?;
        self.ctx.inferencer().predict(&features)
    }

    /// Predict attrition from parallel name / value lists.
    /// The lists must line up; a length mismatch fails before scaling.
    pub fn execute_values<S: AsRef<str>>(
        &self,
        names:  &[S],
        values: &[RawValue],
    ) -> PipelineResult<AttritionPrediction> {
        let features = self.ctx.assembler().assemble(names, values)?;
        for (name, value) in names.iter().zip(values) {
            self.ctx.validator().check(name.as_ref(), value)?;
        }
        self.ctx.inferencer().predict(&features)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::domain::error::PipelineError;
    use crate::domain::features::{FeatureMatrix, FieldDomain, FEATURE_COUNT, FEATURE_NAMES, FIELD_SPECS};
    use crate::domain::traits::{Classifier, Scaler};
    use crate::ml::forest::{DecisionTree, RandomForest};
    use crate::ml::scaler::StandardScaler;

    /// Identity scaler that counts how often it runs
    struct CountingScaler {
        calls: Rc<Cell<usize>>,
    }

    impl Scaler for CountingScaler {
        fn n_features(&self) -> usize { FEATURE_COUNT }

        fn transform(&self, input: &FeatureMatrix) -> PipelineResult<FeatureMatrix> {
            self.calls.set(self.calls.get() + 1);
            input.ensure_width("scaler", FEATURE_COUNT)?;
            Ok(input.clone())
        }
    }

    /// P(1) rises with Overtime and falls with Job_Satisfaction
    struct RuleClassifier;

    impl Classifier for RuleClassifier {
        fn n_features(&self) -> usize { FEATURE_COUNT }

        fn predict_proba(&self, input: &FeatureMatrix) -> PipelineResult<Vec<[f64; 2]>> {
            input.ensure_width("classifier", FEATURE_COUNT)?;
            Ok(input
                .iter_rows()
                .map(|row| {
                    let p1 = (0.3 + 0.4 * row[13] - 0.05 * row[10]).clamp(0.0, 1.0);
                    [1.0 - p1, p1]
                })
                .collect())
        }
    }

    fn context() -> (InferenceContext, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let ctx = InferenceContext::from_artifacts(
            Box::new(CountingScaler { calls: calls.clone() }),
            Box::new(RuleClassifier),
        )
        .unwrap();
        (ctx, calls)
    }

    fn scenario_record() -> EmployeeRecord {
        EmployeeRecord {
            age:                           30,
            gender:                        "Male".into(),
            department:                    "IT".into(),
            job_role:                      "Manager".into(),
            job_level:                     2,
            monthly_income:                50_000,
            hourly_rate:                   50,
            years_at_company:              5,
            years_in_current_role:         3,
            work_life_balance:             3,
            job_satisfaction:              3,
            performance_rating:            3,
            training_hours_last_year:      20,
            overtime:                      "No".into(),
            project_count:                 4,
            absenteeism:                   5,
            work_environment_satisfaction: 2,
            distance_from_home:            10,
            number_of_companies_worked:    2,
        }
    }

    #[test]
    fn test_scenario_produces_defined_output() {
        let (ctx, _) = context();
        let p = PredictUseCase::new(&ctx).execute(&scenario_record()).unwrap();

        assert!(p.label() == "Yes (High Risk)" || p.label() == "No (Low Risk)");
        assert!((p.probabilities[0] + p.probabilities[1] - 1.0).abs() < 1e-9);
        // Overtime=No, satisfaction 3 → p1 = 0.15
        assert_eq!(p.class, 0);
        assert!((p.attrition_percent() - 15.0).abs() < 1e-9);
        assert!((p.confidence_percent() - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let (ctx, _) = context();
        let uc = PredictUseCase::new(&ctx);
        let a = uc.execute(&scenario_record()).unwrap();
        let b = uc.execute(&scenario_record()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_overtime_flips_the_label() {
        let (ctx, _) = context();
        let mut record = scenario_record();
        record.overtime = "Yes".into();
        record.job_satisfaction = 1;
        let p = PredictUseCase::new(&ctx).execute(&record).unwrap();
        assert_eq!(p.label(), "Yes (High Risk)");
    }

    #[test]
    fn test_every_range_endpoint_yields_a_prediction() {
        let (ctx, _) = context();
        let uc = PredictUseCase::new(&ctx);
        let base = scenario_record().raw_values();

        for (i, spec) in FIELD_SPECS.iter().enumerate() {
            if let FieldDomain::Range { min, max, .. } = spec.domain {
                for edge in [min, max] {
                    let mut values = base.clone();
                    values[i] = RawValue::Int(edge);
                    let p = uc.execute_values(&FEATURE_NAMES[..], &values);
                    assert!(p.is_ok(), "{} = {} failed: {:?}", spec.name, edge, p);
                }
            }
        }
    }

    #[test]
    fn test_unknown_gender_is_rejected_before_scaling() {
        let (ctx, calls) = context();
        let mut record = scenario_record();
        record.gender = "Nonbinary".into();

        let err = PredictUseCase::new(&ctx).execute(&record).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidCategory { ref field, .. } if field == "Gender"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_unknown_gender_in_raw_values_is_rejected_before_scaling() {
        let (ctx, calls) = context();
        let mut values = scenario_record().raw_values();
        values[1] = RawValue::from("Nonbinary");

        let err = PredictUseCase::new(&ctx).execute_values(&FEATURE_NAMES[..], &values).unwrap_err();
        assert_eq!(err.kind(), "invalid_category");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_length_mismatch_is_rejected_before_scaling() {
        let (ctx, calls) = context();
        let mut values = scenario_record().raw_values();
        values.pop();

        let err = PredictUseCase::new(&ctx).execute_values(&FEATURE_NAMES[..], &values).unwrap_err();
        assert!(matches!(err, PipelineError::ShapeMismatch { stage: "assembler", .. }));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let (ctx, calls) = context();
        let mut record = scenario_record();
        record.age = 81;
        let err = PredictUseCase::new(&ctx).execute(&record).unwrap_err();
        assert!(matches!(err, PipelineError::OutOfRange { value: 81, .. }));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_runs_with_real_artifacts() {
        // One stump on Overtime (column 13) after standard scaling
        let mut mean = vec![0.0; FEATURE_COUNT];
        mean[13] = 0.5;
        let scaler = StandardScaler { mean, scale: vec![1.0; FEATURE_COUNT], feature_names: None };
        let tree = DecisionTree {
            children_left:  vec![1, -1, -1],
            children_right: vec![2, -1, -1],
            feature:        vec![13, -2, -2],
            threshold:      vec![0.0, -2.0, -2.0],
            value:          vec![[10.0, 10.0], [8.0, 2.0], [3.0, 7.0]],
        };
        let forest = RandomForest { n_features: FEATURE_COUNT, trees: vec![tree] };
        let ctx = InferenceContext::from_artifacts(Box::new(scaler), Box::new(forest)).unwrap();
        let uc = PredictUseCase::new(&ctx);

        let stays = uc.execute(&scenario_record()).unwrap();
        assert_eq!(stays.label(), "No (Low Risk)");
        assert!((stays.attrition_percent() - 20.0).abs() < 1e-9);

        let mut record = scenario_record();
        record.overtime = "Yes".into();
        let leaves = uc.execute(&record).unwrap();
        assert_eq!(leaves.label(), "Yes (High Risk)");
        assert!((leaves.confidence_percent() - 70.0).abs() < 1e-9);
    }
}
