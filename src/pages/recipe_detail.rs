//! Recipe Detail Page
//!
//! The cooking view: scaled ingredient list driven by a servings selector,
//! instruction accordion with one step open at a time, and a countdown
//! timer mounted inside each open step that declares one. Owners get
//! delete and collaborator management, everyone logged in gets save.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::{scale_ingredients, Ingredient, Recipe, RecipeUpdate};
use web_sys::SubmitEvent;

use crate::api::Api;
use crate::components::{use_toasts, RecipeTimer};
use crate::context::{use_app_context, use_auth, Route};
use crate::store::{
    store_remove_recipe, store_update_recipe, use_app_store, AppStateStoreFields,
};

#[component]
pub fn RecipeDetailPage(id: String) -> impl IntoView {
    let store = use_app_store();
    let id = StoredValue::new(id);

    let recipe = Memo::new(move |_| {
        let id = id.get_value();
        store
            .recipes()
            .get()
            .into_iter()
            .find(|recipe| recipe.id == id)
    });

    view! {
        <div class="page recipe-detail">
            {move || match recipe.get() {
                Some(recipe) => view! { <RecipeView recipe=recipe/> }.into_any(),
                None => view! { <p class="not-found">"Recipe not found."</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn RecipeView(recipe: Recipe) -> impl IntoView {
    let auth = use_auth();

    let base_servings = recipe.servings;
    let (servings, set_servings) = signal(base_servings);

    let ingredients = StoredValue::new(recipe.ingredients.clone());
    let scaled = Memo::new(move |_| {
        let target = servings.get();
        ingredients.with_value(|list| match scale_ingredients(list, base_servings, target) {
            Ok(scaled) => scaled,
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[APP] Ingredient scaling failed: {}", err).into(),
                );
                list.clone()
            }
        })
    });

    // One step open at a time; reopening a step remounts its timer fresh
    let (open_step, set_open_step) = signal(None::<u32>);

    let can_edit = auth
        .user()
        .map(|user| recipe.can_edit(&user.id))
        .unwrap_or(false);
    let is_owner = auth
        .user()
        .map(|user| recipe.created_by == user.id)
        .unwrap_or(false);

    let recipe_id = recipe.id.clone();
    let owner_recipe = recipe.clone();

    view! {
        <article>
            <header class="recipe-header">
                <img class="recipe-image" src=recipe.image.clone() alt=recipe.title.clone()/>
                <div>
                    <h1>{recipe.title.clone()}</h1>
                    <p class="recipe-chef">{format!("by {}", recipe.chef_name)}</p>
                    <p class="recipe-meta">
                        {format!(
                            "Prep {} min | Cook {} min | {} base servings",
                            recipe.prep_time, recipe.cook_time, recipe.servings,
                        )}
                    </p>
                    <div class="recipe-tags">
                        {recipe.tags.iter().map(|tag| view! {
                            <span class="tag">{tag.clone()}</span>
                        }).collect_view()}
                    </div>
                    <p class="recipe-description">{recipe.description.clone()}</p>
                    <SaveButton recipe_id=recipe_id.clone()/>
                </div>
            </header>

            <section class="ingredients">
                <div class="ingredients-header">
                    <h2>"Ingredients"</h2>
                    <label class="servings-select">
                        "Servings: "
                        <select on:change=move |ev| {
                            if let Ok(n) = event_target_value(&ev).parse::<u32>() {
                                set_servings.set(n);
                            }
                        }>
                            {(1..=12u32).map(|n| view! {
                                <option value=n.to_string() selected=n == base_servings>
                                    {n.to_string()}
                                </option>
                            }).collect_view()}
                        </select>
                    </label>
                </div>
                // Rebuilt wholesale on every servings change: the list is
                // short, quantities change in place, and names may repeat
                <ul>
                    {move || scaled.get().iter().map(|ingredient| view! {
                        <li class="ingredient">{format_ingredient(ingredient)}</li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="instructions">
                <h2>"Instructions"</h2>
                {recipe.instructions.iter().map(|instruction| {
                    let step = instruction.step;
                    let description = instruction.description.clone();
                    let timer_minutes = instruction.timer_minutes;
                    let is_open = move || open_step.get() == Some(step);
                    view! {
                        <div class="instruction-step">
                            <button
                                class="step-toggle"
                                on:click=move |_| set_open_step.update(|open| {
                                    *open = if *open == Some(step) { None } else { Some(step) };
                                })
                            >
                                <span class="step-number">{format!("Step {}", step)}</span>
                                <span class="step-summary">{description.clone()}</span>
                            </button>
                            {
                                let description = description.clone();
                                move || is_open().then(|| {
                                    let description = description.clone();
                                    view! {
                                        <div class="step-body">
                                            <p>{description.clone()}</p>
                                            {timer_minutes.map(|minutes| view! {
                                                <RecipeTimer minutes=minutes step_description=description.clone()/>
                                            })}
                                        </div>
                                    }
                                })
                            }
                        </div>
                    }
                }).collect_view()}
            </section>

            {can_edit.then(|| view! {
                <CollaboratorSection recipe=owner_recipe.clone()/>
            })}
            {is_owner.then(|| view! {
                <div class="owner-tools">
                    <VisibilityToggle recipe_id=recipe_id.clone() is_public=recipe.is_public/>
                    <DeleteSection recipe_id=recipe_id.clone()/>
                </div>
            })}
        </article>
    }
}

/// "2.25 cups flour", or "4 Thai chilies" when the unit is empty
fn format_ingredient(ingredient: &Ingredient) -> String {
    let quantity = if ingredient.quantity.fract() == 0.0 {
        format!("{}", ingredient.quantity as u64)
    } else {
        format!("{}", ingredient.quantity)
    };
    if ingredient.unit.is_empty() {
        format!("{} {}", quantity, ingredient.name)
    } else {
        format!("{} {} {}", quantity, ingredient.unit, ingredient.name)
    }
}

#[component]
fn SaveButton(recipe_id: String) -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = use_auth();
    let toasts = use_toasts();
    let store = use_app_store();
    let recipe_id = StoredValue::new(recipe_id);

    let is_saved = Memo::new(move |_| {
        store
            .saved_ids()
            .with(|ids| ids.iter().any(|id| *id == recipe_id.get_value()))
    });

    let on_toggle = move |_| {
        if !auth.is_authenticated() {
            toasts.error("Log in to save recipes");
            return;
        }
        let id = recipe_id.get_value();
        let mut ids = store.saved_ids().get_untracked();
        let changed = if is_saved.get_untracked() {
            api.unsave_recipe(&mut ids, &id)
        } else {
            api.save_recipe(&mut ids, &id)
        };
        if changed {
            store.saved_ids().set(ids);
        }
    };

    view! {
        <button class="btn save-toggle" on:click=on_toggle>
            {move || if is_saved.get() { "Saved" } else { "Save" }}
        </button>
    }
}

#[component]
fn CollaboratorSection(recipe: Recipe) -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = use_toasts();
    let store = use_app_store();

    let recipe_id = StoredValue::new(recipe.id.clone());
    let (collaborators, set_collaborators) = signal(recipe.collaborators.clone());
    let (email, set_email) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_add = move |ev: SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        if email.trim().is_empty() || submitting.get() {
            return;
        }
        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.add_collaborator(&recipe_id.get_value(), email.trim()).await {
                Ok(updated) => {
                    set_collaborators.set(updated.collaborators.clone());
                    store_update_recipe(&store, updated);
                    set_email.set(String::new());
                    toasts.success("Collaborator added");
                }
                Err(err) => toasts.error(err.message().to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="collaborators">
            <h2>"Collaborators"</h2>
            <ul>
                <For
                    each=move || collaborators.get()
                    key=|user_id| user_id.clone()
                    children=move |user_id| {
                        let api = expect_context::<Api>();
                        let name = api.chef_name_by_id(&user_id);
                        let on_remove = move |_| {
                            let api = api.clone();
                            let user_id = user_id.clone();
                            spawn_local(async move {
                                match api
                                    .remove_collaborator(&recipe_id.get_value(), &user_id)
                                    .await
                                {
                                    Ok(updated) => {
                                        set_collaborators.set(updated.collaborators.clone());
                                        store_update_recipe(&store, updated);
                                        toasts.success("Collaborator removed");
                                    }
                                    Err(err) => toasts.error(err.message().to_string()),
                                }
                            });
                        };
                        view! {
                            <li class="collaborator">
                                <span>{name}</span>
                                <button class="btn ghost" on:click=on_remove>
                                    "Remove"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <form class="collaborator-form" on:submit=on_add>
                <input
                    type="email"
                    placeholder="Collaborator email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Adding..." } else { "Add" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn VisibilityToggle(recipe_id: String, is_public: bool) -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = use_toasts();
    let store = use_app_store();

    let recipe_id = StoredValue::new(recipe_id);
    let (public, set_public) = signal(is_public);
    let (submitting, set_submitting) = signal(false);

    let on_toggle = move |_| {
        if submitting.get() {
            return;
        }
        set_submitting.set(true);
        let target = !public.get();
        let api = api.clone();
        spawn_local(async move {
            let update = RecipeUpdate {
                is_public: Some(target),
                ..Default::default()
            };
            match api.update_recipe(&recipe_id.get_value(), update).await {
                Ok(updated) => {
                    set_public.set(updated.is_public);
                    store_update_recipe(&store, updated);
                    toasts.success(if target {
                        "Recipe is now public"
                    } else {
                        "Recipe is now private"
                    });
                }
                Err(err) => toasts.error(err.message().to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <button class="btn" on:click=on_toggle disabled=move || submitting.get()>
            {move || if public.get() { "Make private" } else { "Make public" }}
        </button>
    }
}

#[component]
fn DeleteSection(recipe_id: String) -> impl IntoView {
    let api = expect_context::<Api>();
    let ctx = use_app_context();
    let toasts = use_toasts();
    let store = use_app_store();

    let recipe_id = StoredValue::new(recipe_id);
    let (confirming, set_confirming) = signal(false);
    let (deleting, set_deleting) = signal(false);

    let on_delete = move |_| {
        if !confirming.get() {
            set_confirming.set(true);
            return;
        }
        if deleting.get() {
            return;
        }
        set_deleting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.delete_recipe(&recipe_id.get_value()).await {
                Ok(()) => {
                    let id = recipe_id.get_value();
                    store_remove_recipe(&store, &id);
                    // A deleted recipe must not linger in anyone's saved list
                    let mut ids = store.saved_ids().get_untracked();
                    if api.unsave_recipe(&mut ids, &id) {
                        store.saved_ids().set(ids);
                    }
                    toasts.success("Recipe deleted");
                    ctx.navigate(Route::MyRecipes);
                }
                Err(err) => {
                    toasts.error(err.message().to_string());
                    set_deleting.set(false);
                }
            }
        });
    };

    view! {
        <section class="recipe-danger">
            <button class="btn danger" on:click=on_delete disabled=move || deleting.get()>
                {move || if deleting.get() {
                    "Deleting..."
                } else if confirming.get() {
                    "Click again to confirm"
                } else {
                    "Delete recipe"
                }}
            </button>
            {move || confirming.get().then(|| view! {
                <button class="btn" on:click=move |_| set_confirming.set(false)>
                    "Cancel"
                </button>
            })}
        </section>
    }
}
