//! Prompt template for recipe generation.
//!
//! User values are substituted as-is. Nothing is escaped, so a crafted `diet`
//! or `research` string can steer the model.

use crate::dtos::RecipeRequest;

/// Separator used when flattening `preferences` into the `mealType` slot.
pub const PREFERENCE_SEPARATOR: &str = ", ";

pub fn build_recipe_prompt(request: &RecipeRequest) -> String {
    let meal_type = request.preferences.join(PREFERENCE_SEPARATOR);

    format!(
        r#"
You are an expert dietician and chef. Respond ONLY in valid JSON.
Provide 5-7 recipes.
Structure your response as:
{{
    "category": "{diet} recipes",
    "protein": "{protein}",
    "mealType": "{meal_type}",
    "researchSummary": "{research}",
    "recipes": [
        {{
            "title": "Title",
            "ingredients": ["item1", "item2"],
            "steps": ["step1", "step2"],
            "nutrition": {{
                "calories": "...",
                "protein_g": "...",
                "fat_g": "...",
                "carbs_g": "...",
                "vitamins": ["A", "B", ...]
            }}
        }}
    ]
}}
DO NOT output anything except this JSON.
"#,
        diet = request.diet,
        protein = request.protein,
        meal_type = meal_type,
        research = request.research,
    )
}
