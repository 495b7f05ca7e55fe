//! State and actions shared by the CRUD list pages
//!
//! A page calls [`use_resource_list`] once, renders `visible()` and opens
//! its own details form. Details forms save through [`FormActions`]; rows
//! are deleted through [`confirm_delete`].

use crate::shared::api::{crud, ApiClient};
use crate::shared::cancel::use_cancel_token;
use crate::shared::components::confirm_dialog::confirm;
use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::{use_toast, ToastService};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub struct ResourceList<R: Resource> {
    pub items: RwSignal<Vec<R>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Search box content
    pub search: RwSignal<String>,
    pub reload: Callback<()>,
    client: StoredValue<ApiClient>,
    toast: ToastService,
}

impl<R: Resource> Clone for ResourceList<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ResourceList<R> {}

impl<R: Resource + Searchable + Sortable> ResourceList<R> {
    /// Items matching the search box, sorted by `field` (tracked)
    pub fn visible(&self, field: &str, ascending: bool) -> Vec<R> {
        let mut items = filter_list(self.items.get(), &self.search.get());
        sort_list(&mut items, field, ascending);
        items
    }
}

impl<R: Resource> ResourceList<R> {
    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn toast(&self) -> ToastService {
        self.toast
    }
}

/// Loads `R`'s list now and on every `reload`.
pub fn use_resource_list<R: Resource>() -> ResourceList<R> {
    let client = ApiClient::from_config();
    let toast = use_toast();
    let cancel = use_cancel_token();

    let items = RwSignal::new(Vec::<R>::new());
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let reload = {
        let client = client.clone();
        Callback::new(move |_: ()| {
            is_loading.set(true);
            let client = client.clone();
            let cancel = cancel.clone();
            spawn_local(async move {
                let result = crud::fetch_all::<R>(&client).await;
                if cancel.is_cancelled() {
                    return;
                }
                match result {
                    Ok(list) => {
                        items.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        let message = format!("Erreur lors du chargement: {}", e);
                        toast.error(message.clone());
                        error.set(Some(message));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    reload.run(());

    ResourceList {
        items,
        is_loading,
        error,
        search: RwSignal::new(String::new()),
        reload,
        client: StoredValue::new(client),
        toast,
    }
}

/// Save actions of a details form, bound to the component's context
#[derive(Clone, Copy)]
pub struct FormActions {
    client: StoredValue<ApiClient>,
    toast: ToastService,
}

pub fn use_form_actions() -> FormActions {
    FormActions {
        client: StoredValue::new(ApiClient::from_config()),
        toast: use_toast(),
    }
}

impl FormActions {
    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn toast(&self) -> ToastService {
        self.toast
    }

    /// Sends create or update and reports the outcome. The caller validates first.
    pub fn submit<R: Resource>(
        &self,
        id: Option<i64>,
        form: R::Form,
        is_saving: RwSignal<bool>,
        error: RwSignal<Option<String>>,
        on_saved: Callback<()>,
    ) {
        let client = self.client();
        let toast = self.toast;
        let verb = if id.is_some() { "modifié(e)" } else { "créé(e)" };
        is_saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = crud::save::<R>(&client, id, &form).await;
            is_saving.set(false);
            match result {
                Ok(()) => {
                    toast.success(format!("{} {} avec succès", R::element_name(), verb));
                    on_saved.run(());
                }
                Err(e) => {
                    let message = e.to_string();
                    toast.error(message.clone());
                    error.set(Some(message));
                }
            }
        });
    }
}

/// Asks for confirmation, deletes row `id` and reloads the list.
pub fn confirm_delete<R: Resource>(
    list: ResourceList<R>,
    modal_stack: ModalStackService,
    id: i64,
    label: String,
) {
    let message = format!(
        "Voulez-vous vraiment supprimer « {} » ? Cette action est irréversible.",
        label
    );
    let on_confirm = move || {
        let client = list.client();
        let toast = list.toast();
        spawn_local(async move {
            match crud::delete::<R>(&client, id).await {
                Ok(()) => {
                    toast.success(format!("{} supprimé(e)", R::element_name()));
                    list.reload.run(());
                }
                Err(e) => toast.error(format!("Suppression impossible: {}", e)),
            }
        });
    };
    confirm(modal_stack, "Confirmer la suppression", message, on_confirm);
}
