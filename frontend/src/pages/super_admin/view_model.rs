use super::{
    repository::SuperAdminRepository,
    types::DashboardMenu,
    utils::{NewsFormState, StudentField, StudentFormState, SubmitTicket},
};
use crate::{
    api::{
        ApiClient, ApiError, CreateNews, CreateStudent, MutationResponse, ParentOption,
        QuoteResponse, StudentResponse,
    },
    state::notification::{use_notifications, Notification},
};
use leptos::*;
use std::rc::Rc;

fn use_repository() -> SuperAdminRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    SuperAdminRepository::new_with_client(Rc::new(api))
}

#[derive(Clone, Copy)]
pub struct SuperAdminViewModel {
    pub sidebar_open: RwSignal<bool>,
    pub active_menu: RwSignal<Option<DashboardMenu>>,
    /// Handed to the sidebar. Keys that match no panel select nothing.
    pub select_menu: Callback<String>,
}

pub fn use_super_admin_view_model() -> SuperAdminViewModel {
    let sidebar_open = create_rw_signal(false);
    let active_menu = create_rw_signal(Some(DashboardMenu::default()));
    let select_menu = Callback::new(move |key: String| {
        let selected = DashboardMenu::from_key(&key);
        if selected.is_none() {
            log::warn!("sidebar selected unknown menu '{}'", key);
        }
        active_menu.set(selected);
    });

    SuperAdminViewModel {
        sidebar_open,
        active_menu,
        select_menu,
    }
}

type CreateStudentsInput = (SubmitTicket, Vec<CreateStudent>);
type CreateStudentsOutput = (SubmitTicket, Result<MutationResponse, ApiError>);

#[derive(Clone, Copy)]
pub struct AddStudentViewModel {
    pub form: RwSignal<StudentFormState>,
    pub submitting: Memo<bool>,
    pub parents_resource: Resource<bool, Result<Vec<ParentOption>, ApiError>>,
    pub parents_loading: Signal<bool>,
    pub create_action: Action<CreateStudentsInput, CreateStudentsOutput>,
    pub update_field: Callback<(StudentField, String)>,
    pub submit: Callback<()>,
}

/// Feeds a finished submission into the form and fires the callbacks the
/// resolution asks for. Stale tickets fire nothing.
pub fn apply_student_outcome(
    form: RwSignal<StudentFormState>,
    ticket: SubmitTicket,
    outcome: Result<MutationResponse, ApiError>,
    on_notify: Callback<Notification>,
    on_close: Callback<()>,
    refetch: Callback<()>,
) {
    let resolution = form
        .try_update(|state| state.complete(ticket, outcome))
        .flatten();
    if let Some(resolution) = resolution {
        on_notify.call(resolution.notification);
        if resolution.close_and_refetch {
            on_close.call(());
            refetch.call(());
        }
    }
}

pub fn use_add_student_view_model(
    is_open: Signal<bool>,
    on_close: Callback<()>,
    refetch: Callback<()>,
    on_notify: Callback<Notification>,
) -> AddStudentViewModel {
    let repository = use_repository();

    let form = create_rw_signal(StudentFormState::new(is_open.get_untracked()));
    let submitting = create_memo(move |_| form.with(StudentFormState::is_submitting));

    let repo_for_parents = repository.clone();
    let parents_resource = create_resource(
        move || is_open.get(),
        move |open| {
            let repo = repo_for_parents.clone();
            async move {
                if !open {
                    return Ok(Vec::new());
                }
                repo.fetch_parents().await
            }
        },
    );
    let parents_loading: Signal<bool> = parents_resource.loading().into();

    create_effect(move |_| {
        if let Some(Err(err)) = parents_resource.get() {
            log::warn!("parents could not be loaded: {}", err);
        }
    });

    let repo_for_create = repository.clone();
    let create_action = create_action(move |input: &CreateStudentsInput| {
        let repo = repo_for_create.clone();
        let (ticket, batch) = input.clone();
        async move { (ticket, repo.create_students(batch).await) }
    });

    create_effect(move |_| {
        if is_open.get() {
            form.update(StudentFormState::open);
        } else {
            form.update(StudentFormState::close);
        }
    });

    create_effect(move |_| {
        if let Some((ticket, outcome)) = create_action.value().get() {
            apply_student_outcome(form, ticket, outcome, on_notify, on_close, refetch);
        }
    });

    let update_field = Callback::new(move |(field, value): (StudentField, String)| {
        form.update(|state| {
            state.update_field(field, value);
        });
    });

    let submit = Callback::new(move |_: ()| {
        match form.try_update(StudentFormState::begin_submit) {
            Some(Ok(input)) => {
                log::info!("submitting new student");
                create_action.dispatch(input);
            }
            Some(Err(reason)) => log::debug!("student submit ignored: {}", reason),
            None => {}
        }
    });

    AddStudentViewModel {
        form,
        submitting,
        parents_resource,
        parents_loading,
        create_action,
        update_field,
        submit,
    }
}

#[derive(Clone, Copy)]
pub struct ManagementViewModel {
    pub students_reload: RwSignal<u32>,
    pub students_resource: Resource<u32, Result<Vec<StudentResponse>, ApiError>>,
    pub modal_open: RwSignal<bool>,
    pub open_modal: Callback<()>,
    pub close_modal: Callback<()>,
    pub refetch: Callback<()>,
    pub notify: Callback<Notification>,
}

pub fn use_management_view_model() -> ManagementViewModel {
    let repository = use_repository();
    let notifications = use_notifications();

    let students_reload = create_rw_signal(0u32);
    let students_resource = create_resource(
        move || students_reload.get(),
        move |_reload| {
            let repo = repository.clone();
            async move { repo.fetch_students().await }
        },
    );

    let modal_open = create_rw_signal(false);
    let open_modal = Callback::new(move |_: ()| modal_open.set(true));
    let close_modal = Callback::new(move |_: ()| modal_open.set(false));
    let refetch = Callback::new(move |_: ()| {
        students_reload.update(|value| *value = value.wrapping_add(1));
    });
    let notify = Callback::new(move |notification: Notification| notifications.show(notification));

    ManagementViewModel {
        students_reload,
        students_resource,
        modal_open,
        open_modal,
        close_modal,
        refetch,
        notify,
    }
}

#[derive(Clone, Copy)]
pub struct NewsFormViewModel {
    pub form: RwSignal<NewsFormState>,
    pub publish_action: Action<CreateNews, Result<MutationResponse, ApiError>>,
    pub submit: Callback<()>,
}

pub fn use_news_form_view_model() -> NewsFormViewModel {
    let repository = use_repository();
    let notifications = use_notifications();

    let form = create_rw_signal(NewsFormState::default());

    let publish_action = create_action(move |payload: &CreateNews| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move { repo.create_news(payload).await }
    });

    create_effect(move |_| {
        if let Some(outcome) = publish_action.value().get() {
            let notification = form.try_update(|state| state.complete(&outcome));
            if let Some(notification) = notification {
                notifications.show(notification);
            }
        }
    });

    let submit = Callback::new(move |_: ()| {
        match form.try_update(NewsFormState::begin_submit) {
            Some(Ok(payload)) => publish_action.dispatch(payload),
            Some(Err(reason)) => log::debug!("news submit ignored: {}", reason),
            None => {}
        }
    });

    NewsFormViewModel {
        form,
        publish_action,
        submit,
    }
}

#[derive(Clone, Copy)]
pub struct QuotesViewModel {
    pub quotes_resource: Resource<(), Result<Vec<QuoteResponse>, ApiError>>,
}

pub fn use_quotes_view_model() -> QuotesViewModel {
    let repository = use_repository();
    let quotes_resource = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_quotes().await }
        },
    );
    QuotesViewModel { quotes_resource }
}
