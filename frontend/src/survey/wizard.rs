//! Step bookkeeping for the crop survey. Rendering lives in `view.rs`; this
//! module only decides whether the farmer may move on.

pub const TOTAL_STEPS: u8 = 6;
pub const RESULT_STEP: u8 = TOTAL_STEPS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    State,
    District,
    SowingMonth,
    SoilType,
    Ph,
    N,
    P,
    K,
    LandSize,
}

impl Field {
    /// DOM id of the input bound to this field.
    pub fn id(self) -> &'static str {
        match self {
            Field::State => "state",
            Field::District => "district",
            Field::SowingMonth => "sowingMonth",
            Field::SoilType => "soilType",
            Field::Ph => "ph",
            Field::N => "N",
            Field::P => "P",
            Field::K => "K",
            Field::LandSize => "landSize",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::State => "State",
            Field::District => "District",
            Field::SowingMonth => "Sowing Month",
            Field::SoilType => "Soil Type",
            Field::Ph => "Soil pH",
            Field::N => "Nitrogen (N)",
            Field::P => "Phosphorus (P)",
            Field::K => "Potassium (K)",
            Field::LandSize => "Land Size (acres)",
        }
    }
}

/// Fields shown on `step`. The result step has none.
pub fn step_fields(step: u8) -> &'static [Field] {
    match step {
        1 => &[Field::State, Field::District],
        2 => &[Field::SowingMonth],
        3 => &[Field::SoilType, Field::Ph],
        4 => &[Field::N, Field::P, Field::K],
        5 => &[Field::LandSize],
        _ => &[],
    }
}

/// Raw text of every survey input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurveyForm {
    pub state: String,
    pub district: String,
    pub sowing_month: String,
    pub soil_type: String,
    pub ph: String,
    pub n: String,
    pub p: String,
    pub k: String,
    pub land_size: String,
}

impl SurveyForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::State => &self.state,
            Field::District => &self.district,
            Field::SowingMonth => &self.sowing_month,
            Field::SoilType => &self.soil_type,
            Field::Ph => &self.ph,
            Field::N => &self.n,
            Field::P => &self.p,
            Field::K => &self.k,
            Field::LandSize => &self.land_size,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::State => &mut self.state,
            Field::District => &mut self.district,
            Field::SowingMonth => &mut self.sowing_month,
            Field::SoilType => &mut self.soil_type,
            Field::Ph => &mut self.ph,
            Field::N => &mut self.n,
            Field::P => &mut self.p,
            Field::K => &mut self.k,
            Field::LandSize => &mut self.land_size,
        };
        *slot = value;
    }

    /// A step is valid when none of its fields is blank.
    pub fn step_valid(&self, step: u8) -> bool {
        step_fields(step)
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextOutcome {
    Advanced,
    /// Current step has a blank field; nothing changed.
    Invalid,
    /// Step 1 without a session: the sign-in modal should open instead.
    NeedsSignIn,
    /// Moved from the last input step onto the result step.
    Submit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurveyWizard {
    pub step: u8,
    pub direction: Direction,
    pub form: SurveyForm,
}

impl Default for SurveyWizard {
    fn default() -> Self {
        Self {
            step: 1,
            direction: Direction::Forward,
            form: SurveyForm::default(),
        }
    }
}

impl SurveyWizard {
    pub fn current_valid(&self) -> bool {
        self.form.step_valid(self.step)
    }

    pub fn next(&mut self, signed_in: bool) -> NextOutcome {
        if self.step == 1 && !signed_in {
            return NextOutcome::NeedsSignIn;
        }
        if self.step >= RESULT_STEP || !self.current_valid() {
            return NextOutcome::Invalid;
        }
        self.step += 1;
        self.direction = Direction::Forward;
        if self.step == RESULT_STEP {
            NextOutcome::Submit
        } else {
            NextOutcome::Advanced
        }
    }

    pub fn back(&mut self) {
        if self.step > 1 {
            self.step -= 1;
            self.direction = Direction::Back;
        }
    }

    /// Width of the progress bar in percent.
    pub fn progress(&self) -> f64 {
        f64::from(self.step - 1) / f64::from(TOTAL_STEPS - 1) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SurveyForm {
        SurveyForm {
            state: "Madhya Pradesh".into(),
            district: "Indore".into(),
            sowing_month: "june".into(),
            soil_type: "Black".into(),
            ph: "6.8".into(),
            n: "90".into(),
            p: "42".into(),
            k: "43".into(),
            land_size: "2.5".into(),
        }
    }

    #[test]
    fn next_is_a_no_op_while_a_field_is_blank() {
        for step in 1..=5u8 {
            for field in step_fields(step) {
                let mut form = filled();
                form.set(*field, "   ".into());
                let mut wizard = SurveyWizard {
                    step,
                    direction: Direction::Back,
                    form,
                };
                let before = wizard.clone();
                assert_eq!(wizard.next(true), NextOutcome::Invalid, "{:?}", field);
                assert_eq!(wizard, before);
            }
        }
    }

    #[test]
    fn sign_in_gate_comes_before_validation() {
        let mut wizard = SurveyWizard::default();
        assert_eq!(wizard.next(false), NextOutcome::NeedsSignIn);
        assert_eq!(wizard.step, 1);

        wizard.form = filled();
        assert_eq!(wizard.next(false), NextOutcome::NeedsSignIn);
        assert_eq!(wizard.next(true), NextOutcome::Advanced);
        assert_eq!(wizard.step, 2);
    }

    #[test]
    fn walking_through_submits_on_the_last_step() {
        let mut wizard = SurveyWizard {
            form: filled(),
            ..SurveyWizard::default()
        };
        for expected in 2..=5u8 {
            assert_eq!(wizard.next(true), NextOutcome::Advanced);
            assert_eq!(wizard.step, expected);
        }
        assert_eq!(wizard.next(true), NextOutcome::Submit);
        assert_eq!(wizard.step, RESULT_STEP);
        assert_eq!(wizard.next(true), NextOutcome::Invalid);
        assert_eq!(wizard.progress(), 100.0);
    }

    #[test]
    fn back_stops_at_the_first_step() {
        let mut wizard = SurveyWizard {
            step: 2,
            ..SurveyWizard::default()
        };
        wizard.back();
        assert_eq!(wizard.step, 1);
        assert_eq!(wizard.direction, Direction::Back);
        wizard.back();
        assert_eq!(wizard.step, 1);
        assert_eq!(wizard.progress(), 0.0);
    }
}
