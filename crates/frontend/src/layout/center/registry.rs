//! Page registry: maps a [`PageKey`] to its view

use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_floor::ui::list::FloorList;
use crate::domain::a003_table::ui::list::TableList;
use crate::domain::a004_unit::ui::list::UnitList;
use crate::domain::a005_ingredient_group::ui::list::IngredientGroupList;
use crate::domain::a006_ingredient::ui::list::IngredientList;
use crate::domain::a007_menu::ui::list::MenuList;
use crate::domain::a008_customer::ui::list::CustomerList;
use crate::domain::a009_menu_ingredient::ui::composition::MenuCompositionPage;
use crate::layout::center::home::HomePage;
use crate::layout::global_context::PageKey;
use crate::projections::p900_stock::ui::list::StockList;
use crate::projections::p901_purchase::ui::list::PurchaseList;
use leptos::prelude::*;

pub fn render_page(key: PageKey) -> AnyView {
    match key {
        PageKey::Home => view! { <HomePage /> }.into_any(),
        PageKey::Menus => view! { <MenuList /> }.into_any(),
        PageKey::MenuComposition(menu_id) => view! { <MenuCompositionPage menu_id=menu_id /> }.into_any(),
        PageKey::Stocks => view! { <StockList /> }.into_any(),
        PageKey::Purchases => view! { <PurchaseList /> }.into_any(),
        PageKey::Categories => view! { <CategoryList /> }.into_any(),
        PageKey::Ingredients => view! { <IngredientList /> }.into_any(),
        PageKey::IngredientGroups => view! { <IngredientGroupList /> }.into_any(),
        PageKey::Units => view! { <UnitList /> }.into_any(),
        PageKey::Tables => view! { <TableList /> }.into_any(),
        PageKey::Floors => view! { <FloorList /> }.into_any(),
        PageKey::Customers => view! { <CustomerList /> }.into_any(),
    }
}
