//! Create Recipe Page
//!
//! Recipe authoring form with dynamic ingredient and instruction rows.
//! Row fields stay as raw strings until submit, where they are parsed and
//! validated into a draft for the mock backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::{Ingredient, Instruction, RecipeDraft};
use web_sys::SubmitEvent;

use crate::api::Api;
use crate::components::use_toasts;
use crate::context::{use_app_context, use_auth, Route};
use crate::store::{store_add_recipe, use_app_store};

/// One editable ingredient row, raw form values
#[derive(Clone, Debug, Default, PartialEq)]
struct IngredientInput {
    name: String,
    quantity: String,
    unit: String,
}

/// One editable instruction row; `timer` is minutes, empty for no timer
#[derive(Clone, Debug, Default, PartialEq)]
struct InstructionInput {
    description: String,
    timer: String,
}

#[component]
pub fn CreateRecipePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="page create-recipe">
            {move || if auth.is_authenticated() {
                view! { <RecipeForm/> }.into_any()
            } else {
                view! {
                    <p class="auth-required">"Log in to share a recipe."</p>
                }.into_any()
            }}
        </div>
    }
}

#[component]
fn RecipeForm() -> impl IntoView {
    let api = expect_context::<Api>();
    let ctx = use_app_context();
    let auth = use_auth();
    let toasts = use_toasts();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (servings, set_servings) = signal("4".to_string());
    let (prep_time, set_prep_time) = signal(String::new());
    let (cook_time, set_cook_time) = signal(String::new());
    let (tags, set_tags) = signal(String::new());
    let (image, set_image) = signal(String::new());
    let (is_public, set_is_public) = signal(true);
    let (ingredients, set_ingredients) = signal(vec![IngredientInput::default()]);
    let (instructions, set_instructions) = signal(vec![InstructionInput::default()]);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(user) = auth.user() else { return };
        if submitting.get() {
            return;
        }

        let draft = match build_draft(
            &user.id,
            &user.username,
            &title.get(),
            &description.get(),
            &servings.get(),
            &prep_time.get(),
            &cook_time.get(),
            &tags.get(),
            &image.get(),
            is_public.get(),
            &ingredients.get(),
            &instructions.get(),
        ) {
            Ok(draft) => draft,
            Err(message) => {
                toasts.error(message);
                return;
            }
        };

        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            let created = api.create_recipe(draft).await;
            let id = created.id.clone();
            store_add_recipe(&store, created);
            toasts.success("Recipe published");
            ctx.navigate(Route::RecipeDetail(id));
        });
    };

    view! {
        <form class="recipe-form" on:submit=on_submit>
            <h1>"Share a recipe"</h1>

            <label>
                "Title"
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <textarea
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div class="form-row">
                <label>
                    "Servings"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || servings.get()
                        on:input=move |ev| set_servings.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Prep time (min)"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || prep_time.get()
                        on:input=move |ev| set_prep_time.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Cook time (min)"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || cook_time.get()
                        on:input=move |ev| set_cook_time.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <label>
                "Tags (comma separated)"
                <input
                    type="text"
                    placeholder="dinner, italian"
                    prop:value=move || tags.get()
                    on:input=move |ev| set_tags.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Image URL"
                <input
                    type="text"
                    prop:value=move || image.get()
                    on:input=move |ev| set_image.set(event_target_value(&ev))
                />
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || is_public.get()
                    on:change=move |ev| set_is_public.set(event_target_checked(&ev))
                />
                "Public recipe"
            </label>

            <fieldset class="ingredient-rows">
                <legend>"Ingredients"</legend>
                {move || ingredients.get().into_iter().enumerate().map(|(index, row)| view! {
                    <div class="ingredient-row">
                        <input
                            type="text"
                            placeholder="Quantity"
                            prop:value=row.quantity.clone()
                            on:input=move |ev| set_ingredients.update(|rows| {
                                if let Some(row) = rows.get_mut(index) {
                                    row.quantity = event_target_value(&ev);
                                }
                            })
                        />
                        <input
                            type="text"
                            placeholder="Unit (optional)"
                            prop:value=row.unit.clone()
                            on:input=move |ev| set_ingredients.update(|rows| {
                                if let Some(row) = rows.get_mut(index) {
                                    row.unit = event_target_value(&ev);
                                }
                            })
                        />
                        <input
                            type="text"
                            placeholder="Ingredient"
                            prop:value=row.name.clone()
                            on:input=move |ev| set_ingredients.update(|rows| {
                                if let Some(row) = rows.get_mut(index) {
                                    row.name = event_target_value(&ev);
                                }
                            })
                        />
                        <button
                            type="button"
                            class="btn ghost"
                            on:click=move |_| set_ingredients.update(|rows| {
                                if rows.len() > 1 {
                                    rows.remove(index);
                                }
                            })
                        >
                            "Remove"
                        </button>
                    </div>
                }).collect_view()}
                <button
                    type="button"
                    class="btn"
                    on:click=move |_| set_ingredients.update(|rows| {
                        rows.push(IngredientInput::default());
                    })
                >
                    "Add ingredient"
                </button>
            </fieldset>

            <fieldset class="instruction-rows">
                <legend>"Instructions"</legend>
                {move || instructions.get().into_iter().enumerate().map(|(index, row)| view! {
                    <div class="instruction-row">
                        <span class="step-number">{format!("{}.", index + 1)}</span>
                        <textarea
                            placeholder="Describe this step"
                            prop:value=row.description.clone()
                            on:input=move |ev| set_instructions.update(|rows| {
                                if let Some(row) = rows.get_mut(index) {
                                    row.description = event_target_value(&ev);
                                }
                            })
                        ></textarea>
                        <input
                            type="text"
                            class="timer-input"
                            placeholder="Timer (min)"
                            prop:value=row.timer.clone()
                            on:input=move |ev| set_instructions.update(|rows| {
                                if let Some(row) = rows.get_mut(index) {
                                    row.timer = event_target_value(&ev);
                                }
                            })
                        />
                        <button
                            type="button"
                            class="btn ghost"
                            on:click=move |_| set_instructions.update(|rows| {
                                if rows.len() > 1 {
                                    rows.remove(index);
                                }
                            })
                        >
                            "Remove"
                        </button>
                    </div>
                }).collect_view()}
                <button
                    type="button"
                    class="btn"
                    on:click=move |_| set_instructions.update(|rows| {
                        rows.push(InstructionInput::default());
                    })
                >
                    "Add step"
                </button>
            </fieldset>

            <button class="btn primary" type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Publishing..." } else { "Publish recipe" }}
            </button>
        </form>
    }
}

/// Parse and validate the raw form into a draft, or a user-facing message
#[allow(clippy::too_many_arguments)]
fn build_draft(
    user_id: &str,
    username: &str,
    title: &str,
    description: &str,
    servings: &str,
    prep_time: &str,
    cook_time: &str,
    tags: &str,
    image: &str,
    is_public: bool,
    ingredients: &[IngredientInput],
    instructions: &[InstructionInput],
) -> Result<RecipeDraft, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required".to_string());
    }

    let servings = servings
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| "Servings must be a positive number".to_string())?;
    let prep_time = parse_minutes(prep_time, "Prep time")?;
    let cook_time = parse_minutes(cook_time, "Cook time")?;

    let mut parsed_ingredients = Vec::new();
    for row in ingredients {
        let name = row.name.trim();
        if name.is_empty() && row.quantity.trim().is_empty() {
            continue;
        }
        if name.is_empty() {
            return Err("Every ingredient needs a name".to_string());
        }
        let quantity = row
            .quantity
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|q| *q >= 0.0)
            .ok_or_else(|| format!("Invalid quantity for \"{}\"", name))?;
        parsed_ingredients.push(Ingredient::new(name, quantity, row.unit.trim()));
    }
    if parsed_ingredients.is_empty() {
        return Err("At least one ingredient is required".to_string());
    }

    let mut parsed_instructions = Vec::new();
    for row in instructions {
        let description = row.description.trim();
        if description.is_empty() {
            continue;
        }
        let timer = row.timer.trim();
        let timer_minutes = if timer.is_empty() {
            None
        } else {
            Some(
                timer
                    .parse::<f64>()
                    .ok()
                    .filter(|m| *m > 0.0)
                    .ok_or_else(|| "Timers must be a positive number of minutes".to_string())?,
            )
        };
        let step = parsed_instructions.len() as u32 + 1;
        parsed_instructions.push(Instruction::new(step, description, timer_minutes));
    }
    if parsed_instructions.is_empty() {
        return Err("At least one instruction step is required".to_string());
    }

    let tags = tags
        .split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    Ok(RecipeDraft {
        title: title.to_string(),
        description: description.trim().to_string(),
        servings,
        prep_time,
        cook_time,
        tags,
        ingredients: parsed_ingredients,
        instructions: parsed_instructions,
        created_by: user_id.to_string(),
        chef_name: username.to_string(),
        is_public,
        image: image.trim().to_string(),
    })
}

fn parse_minutes(value: &str, field: &str) -> Result<u32, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse::<u32>()
        .map_err(|_| format!("{} must be a whole number of minutes", field))
}
