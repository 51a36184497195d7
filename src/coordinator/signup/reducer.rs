use crate::coordinator::signup::intent::SignupIntent;
use crate::coordinator::signup::state::SignupState;
use crate::mvi::Reducer;

pub struct SignupReducer;

impl Reducer for SignupReducer {
    type State = SignupState;
    type Intent = SignupIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SignupIntent::Advance(value) => {
                let SignupState { step, mut draft } = state;
                match step.field() {
                    Some(field) => {
                        draft.set(field, value);
                        SignupState {
                            step: step.next(),
                            draft,
                        }
                    }
                    // Complete accepts nothing further
                    None => SignupState { step, draft },
                }
            }
        }
    }
}
