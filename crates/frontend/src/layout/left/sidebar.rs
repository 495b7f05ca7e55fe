//! Sidebar navigation: home entry plus collapsible groups of pages

use crate::layout::global_context::{use_app_context, PageKey};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(PageKey, &'static str)>, // (page, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "restaurant",
            label: "Restaurant",
            icon: "menus",
            items: vec![
                (PageKey::Menus, "menus"),
                (PageKey::Categories, "folder"),
                (PageKey::Tables, "table"),
                (PageKey::Floors, "building"),
                (PageKey::Customers, "customers"),
            ],
        },
        MenuGroup {
            id: "stocks",
            label: "Stocks",
            icon: "inventory",
            items: vec![
                (PageKey::Stocks, "inventory"),
                (PageKey::Purchases, "purchases"),
                (PageKey::Ingredients, "item"),
                (PageKey::IngredientGroups, "layers"),
                (PageKey::Units, "ruler"),
            ],
        },
    ]
}

#[component]
fn SidebarItem(page: PageKey, icon_name: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.active.get().menu_entry() == page
            on:click=move |_| ctx.navigate(page)
        >
            <div class="app-sidebar__item-content">
                {icon(icon_name)}
                <span>{page.title()}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            <SidebarItem page=PageKey::Home icon_name="home" />
            {groups
                .into_iter()
                .map(|group| {
                    let group_id = group.id;
                    let items = StoredValue::new(group.items);
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item app-sidebar__item--group"
                                on:click=move |_| {
                                    expanded_groups.update(|open| {
                                        if let Some(pos) = open.iter().position(|g| *g == group_id) {
                                            open.remove(pos);
                                        } else {
                                            open.push(group_id);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id)
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=move || expanded_groups.get().contains(&group_id)>
                                <div class="app-sidebar__children">
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|(page, icon_name)| view! { <SidebarItem page=page icon_name=icon_name /> })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_has_one_entry() {
        let pages: Vec<PageKey> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(page, _)| page))
            .collect();
        assert_eq!(pages.len(), 10);
        for page in &pages {
            assert_eq!(pages.iter().filter(|p| *p == page).count(), 1);
            assert_eq!(page.menu_entry(), *page);
        }
        assert!(!pages.contains(&PageKey::Home));
    }
}
