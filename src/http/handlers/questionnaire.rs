use axum::Json;

use crate::survey::questionnaire::{Questionnaire, questionnaire};

pub async fn get_questionnaire_handler() -> Json<Questionnaire> {
    Json(questionnaire())
}
