use super::types::RecommendationRequest;

/// Compose the single prompt sent to the model.
///
/// The "only from this list" rule is an instruction to the model; its answer
/// is shown as-is and never filtered against the library.
pub fn build_recommendation_prompt(request: &RecommendationRequest) -> String {
    format!(
        r#"I am a gamer with the following games in my Steam library:
{games}

I want you to recommend {count} games FROM THIS LIST ONLY based on this request:
"{query}"

Format the response nicely. For each recommendation:
1. Name of the game
2. Why it fits my request (be specific)

If the game is not in my list, do not recommend it."#,
        games = request.game_names.join(", "),
        count = request.count,
        query = request.user_query,
    )
}
