// ============================================================
// Layer 3 — EmployeeRecord Domain Type
// ============================================================
// The nineteen attributes the user supplies for one employee.
//
// Categorical fields are kept as the raw label strings the user
// typed or picked ("Male", "IT", ...). Encoding them into integer
// codes is the job of the data layer, which is also where an
// unknown label is reported.
//
// Serde field names are the training-time column names so a
// batch file can be written with the same headers as the
// training data.

use serde::{Deserialize, Serialize};

use crate::domain::features::{FieldDomain, RawValue, FEATURE_COUNT, FIELD_SPECS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Job_Role")]
    pub job_role: String,
    #[serde(rename = "Job_Level")]
    pub job_level: i64,
    #[serde(rename = "Monthly_Income")]
    pub monthly_income: i64,
    #[serde(rename = "Hourly_Rate")]
    pub hourly_rate: i64,
    #[serde(rename = "Years_at_Company")]
    pub years_at_company: i64,
    #[serde(rename = "Years_in_Current_Role")]
    pub years_in_current_role: i64,
    #[serde(rename = "Work_Life_Balance")]
    pub work_life_balance: i64,
    #[serde(rename = "Job_Satisfaction")]
    pub job_satisfaction: i64,
    #[serde(rename = "Performance_Rating")]
    pub performance_rating: i64,
    #[serde(rename = "Training_Hours_Last_Year")]
    pub training_hours_last_year: i64,
    #[serde(rename = "Overtime")]
    pub overtime: String,
    #[serde(rename = "Project_Count")]
    pub project_count: i64,
    #[serde(rename = "Absenteeism")]
    pub absenteeism: i64,
    #[serde(rename = "Work_Environment_Satisfaction")]
    pub work_environment_satisfaction: i64,
    #[serde(rename = "Distance_From_Home")]
    pub distance_from_home: i64,
    #[serde(rename = "Number_of_Companies_Worked")]
    pub number_of_companies_worked: i64,
}

impl EmployeeRecord {
    /// The record's values in FEATURE_NAMES order, ready for the assembler.
    pub fn raw_values(&self) -> Vec<RawValue> {
        let values: [RawValue; FEATURE_COUNT] = [
            self.age.into(),
            self.gender.clone().into(),
            self.department.clone().into(),
            self.job_role.clone().into(),
            self.job_level.into(),
            self.monthly_income.into(),
            self.hourly_rate.into(),
            self.years_at_company.into(),
            self.years_in_current_role.into(),
            self.work_life_balance.into(),
            self.job_satisfaction.into(),
            self.performance_rating.into(),
            self.training_hours_last_year.into(),
            self.overtime.clone().into(),
            self.project_count.into(),
            self.absenteeism.into(),
            self.work_environment_satisfaction.into(),
            self.distance_from_home.into(),
            self.number_of_companies_worked.into(),
        ];
        values.into()
    }
}

/// The record the input form starts from before the user edits anything
impl Default for EmployeeRecord {
    fn default() -> Self {
        let int = |i: usize| match FIELD_SPECS[i].domain {
            FieldDomain::Range { default, .. } => default,
            FieldDomain::Choices { .. }        => 0,
        };
        let text = |i: usize| match FIELD_SPECS[i].domain {
            FieldDomain::Choices { default, .. } => default.to_string(),
            FieldDomain::Range { .. }            => String::new(),
        };

        Self {
            age:                           int(0),
            gender:                        text(1),
            department:                    text(2),
            job_role:                      text(3),
            job_level:                     int(4),
            monthly_income:                int(5),
            hourly_rate:                   int(6),
            years_at_company:              int(7),
            years_in_current_role:         int(8),
            work_life_balance:             int(9),
            job_satisfaction:              int(10),
            performance_rating:            int(11),
            training_hours_last_year:      int(12),
            overtime:                      text(13),
            project_count:                 int(14),
            absenteeism:                   int(15),
            work_environment_satisfaction: int(16),
            distance_from_home:            int(17),
            number_of_companies_worked:    int(18),
        }
    }
}
