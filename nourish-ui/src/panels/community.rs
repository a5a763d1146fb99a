use leptos::*;
use nourish::panels::community::{CommunityTab, Post, PostCategory};
use nourish::panels::CommunityPanel;

use super::{read, write, PanelTitle};
use crate::state::{use_app_state, ShellHandle};

const CATEGORIES: [PostCategory; 5] = [
    PostCategory::General,
    PostCategory::Recipe,
    PostCategory::SuccessStory,
    PostCategory::Tip,
    PostCategory::Photo,
];

const TABS: [(CommunityTab, &str); 3] = [
    (CommunityTab::Feed, "community.feed"),
    (CommunityTab::Challenges, "community.challenges"),
    (CommunityTab::Recipes, "community.recipes"),
];

fn category_value(category: PostCategory) -> &'static str {
    match category {
        PostCategory::General => "general",
        PostCategory::Recipe => "recipe",
        PostCategory::SuccessStory => "success",
        PostCategory::Tip => "tip",
        PostCategory::Photo => "photo",
    }
}

#[component]
fn PostCard(post: Post) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-5 border border-emerald-100 space-y-3">
            <div class="flex items-center space-x-3">
                <div class="w-10 h-10 rounded-full bg-teal-500 text-white flex items-center justify-center font-semibold">
                    {post.avatar}
                </div>
                <div class="flex-1">
                    <p class="font-medium">{post.author}</p>
                    <p class="text-xs text-gray-500">{post.time}</p>
                </div>
                <span class="text-xs bg-emerald-50 text-emerald-700 rounded-full px-2 py-0.5">
                    {post.category.label()}
                </span>
            </div>
            <h3 class="font-semibold">{post.title}</h3>
            <p class="text-sm text-gray-700 whitespace-pre-line">{post.content}</p>
            {post.image.map(|src| view! { <img src=src class="rounded-lg max-h-64" alt="" /> })}
            <div class="flex flex-wrap gap-1">
                {post.tags
                    .into_iter()
                    .map(|tag| view! { <span class="text-xs text-emerald-700">{format!("#{}", tag)}</span> })
                    .collect_view()}
            </div>
            <div class="flex space-x-4 text-sm text-gray-500">
                <span>{format!("❤️ {}", post.likes)}</span>
                <span>{format!("💬 {}", post.comments)}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Community(shell: ShellHandle) -> impl IntoView {
    let state = use_app_state();

    let tab = move || read(shell, |p: &CommunityPanel| p.tab()).unwrap_or_default();
    let draft = move || read(shell, |p: &CommunityPanel| p.draft().to_string()).unwrap_or_default();
    let feed = move |recipes_only: bool| {
        read(shell, |p: &CommunityPanel| {
            p.feed()
                .iter()
                .filter(|post| !recipes_only || post.category == PostCategory::Recipe)
                .cloned()
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
    };
    let stats = read(shell, |p: &CommunityPanel| p.stats());

    let on_share = move |_| {
        let shared = write(shell, |p: &mut CommunityPanel| p.share().is_some()).unwrap_or(false);
        if shared {
            state.toasts().success("Shared!", "Your post is now live in the community feed");
        }
    };

    view! {
        <div class="space-y-6">
            <PanelTitle
                title=Signal::derive(move || state.t("community.title"))
                subtitle=Signal::derive(move || state.t("community.subtitle"))
            />

            <div class="grid lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 space-y-4">
                    <div class="flex space-x-2">
                        {TABS
                            .into_iter()
                            .map(|(kind, key)| view! {
                                <button
                                    class=move || {
                                        if tab() == kind {
                                            "px-4 py-2 rounded-lg bg-emerald-600 text-white"
                                        } else {
                                            "px-4 py-2 rounded-lg bg-white border border-emerald-100"
                                        }
                                    }
                                    on:click=move |_| {
                                        write(shell, |p: &mut CommunityPanel| p.set_tab(kind));
                                    }
                                >
                                    {move || state.t(key)}
                                </button>
                            })
                            .collect_view()}
                    </div>

                    {move || match tab() {
                        CommunityTab::Feed | CommunityTab::Recipes => {
                            let recipes_only = tab() == CommunityTab::Recipes;
                            view! {
                                <div class="bg-white rounded-xl p-5 border border-emerald-100 space-y-3">
                                    <textarea
                                        rows="3"
                                        placeholder="Share a recipe, tip or success story... #hashtags become tags"
                                        class="w-full border border-gray-300 rounded-lg px-3 py-2"
                                        prop:value=draft
                                        on:input=move |ev| {
                                            write(shell, |p: &mut CommunityPanel| p.set_draft(event_target_value(&ev)));
                                        }
                                    />
                                    <div class="flex justify-between">
                                        <select
                                            class="border border-gray-300 rounded-lg px-2 py-1 text-sm"
                                            on:change=move |ev| {
                                                let value = event_target_value(&ev);
                                                if let Some(category) = CATEGORIES.into_iter().find(|c| category_value(*c) == value) {
                                                    write(shell, |p: &mut CommunityPanel| p.set_draft_category(category));
                                                }
                                            }
                                        >
                                            {CATEGORIES
                                                .into_iter()
                                                .map(|c| view! { <option value=category_value(c)>{c.label()}</option> })
                                                .collect_view()}
                                        </select>
                                        <button
                                            class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 disabled:bg-emerald-300 text-white rounded-lg text-sm"
                                            disabled=move || draft().trim().is_empty()
                                            on:click=on_share
                                        >
                                            {move || state.t("community.share")}
                                        </button>
                                    </div>
                                </div>
                                <For
                                    each=move || feed(recipes_only)
                                    key=|post| post.id
                                    children=|post| view! { <PostCard post=post /> }
                                />
                            }
                                .into_view()
                        }
                        CommunityTab::Challenges => read(shell, |p: &CommunityPanel| p.challenges())
                            .unwrap_or_default()
                            .iter()
                            .map(|challenge| view! {
                                <div class="bg-white rounded-xl p-5 border border-emerald-100">
                                    <h3 class="font-semibold">{challenge.name}</h3>
                                    <p class="text-sm text-gray-600">{challenge.description}</p>
                                    <div class="flex justify-between text-sm text-gray-500 mt-2">
                                        <span>{challenge.participants_label()}</span>
                                        <span>{format!("{} days left", challenge.days_left)}</span>
                                    </div>
                                </div>
                            })
                            .collect_view(),
                    }}
                </div>

                <div class="space-y-4">
                    {stats.map(|stats| view! {
                        <div class="bg-white rounded-xl p-5 border border-emerald-100 space-y-2">
                            <h3 class="font-semibold">{move || state.t("community.stats")}</h3>
                            <p class="text-sm flex justify-between"><span>"Active Members"</span><span>{stats.active_members}</span></p>
                            <p class="text-sm flex justify-between"><span>"Recipes Shared"</span><span>{stats.recipes_shared}</span></p>
                            <p class="text-sm flex justify-between"><span>"Success Stories"</span><span>{stats.success_stories}</span></p>
                        </div>
                    })}

                    <div class="bg-white rounded-xl p-5 border border-emerald-100">
                        <h3 class="font-semibold mb-2">{move || state.t("community.trending")}</h3>
                        <div class="flex flex-wrap gap-2">
                            {read(shell, |p: &CommunityPanel| p.trending_topics())
                                .unwrap_or_default()
                                .iter()
                                .map(|topic| view! {
                                    <span class="text-xs bg-emerald-50 text-emerald-700 rounded-full px-2 py-1">{*topic}</span>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="bg-white rounded-xl p-5 border border-emerald-100 space-y-3">
                        <h3 class="font-semibold">{move || state.t("community.contributors")}</h3>
                        {read(shell, |p: &CommunityPanel| p.top_contributors())
                            .unwrap_or_default()
                            .iter()
                            .map(|c| view! {
                                <div class="flex items-center space-x-3">
                                    <div class="w-8 h-8 rounded-full bg-emerald-500 text-white text-xs flex items-center justify-center">
                                        {c.initials()}
                                    </div>
                                    <div class="flex-1">
                                        <p class="text-sm font-medium">{c.name}</p>
                                        <p class="text-xs text-gray-500">{c.badge}</p>
                                    </div>
                                    <span class="text-xs text-gray-400">{format!("{} posts", c.posts)}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
