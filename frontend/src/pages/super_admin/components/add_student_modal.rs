use crate::{
    api::{ApiError, ParentOption},
    pages::super_admin::{
        utils::{StudentField, PARENT_PLACEHOLDER},
        view_model::{use_add_student_view_model, AddStudentViewModel},
    },
    state::notification::Notification,
};
use leptos::{ev, *};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-gray-100";

/// Modal for creating one student. Renders nothing while `is_open` is false.
#[component]
pub fn AddStudentModal(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    refetch: Callback<()>,
    on_notify: Callback<Notification>,
) -> impl IntoView {
    let vm = use_add_student_view_model(is_open, on_close, refetch, on_notify);

    view! {
        <Show when=move || is_open.get()>
            <StudentCreationDialog vm=vm on_close=on_close />
        </Show>
    }
}

#[component]
fn StudentCreationDialog(vm: AddStudentViewModel, on_close: Callback<()>) -> impl IntoView {
    let form = vm.form;
    let submitting = vm.submitting;
    let parents_disabled = Signal::derive(move || submitting.get() || vm.parents_loading.get());
    let parents = Signal::derive(move || {
        if vm.parents_loading.get() {
            None
        } else {
            vm.parents_resource.get()
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit.call(());
    };
    let close = move |_| on_close.call(());

    view! {
        <div class="fixed inset-0 z-50 overflow-y-auto bg-black bg-opacity-50 flex items-center justify-center">
            <div class="bg-white rounded-lg w-full max-w-md p-6 relative" role="dialog" aria-modal="true">
                <button
                    type="button"
                    aria-label="Tutup"
                    class="absolute right-4 top-4 text-gray-500 hover:text-gray-700"
                    disabled=move || submitting.get()
                    on:click=close
                >
                    {"✕"}
                </button>

                <h2 class="text-xl font-bold text-gray-900 mb-6">"Tambah Siswa"</h2>

                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Nama Lengkap"</label>
                        <input
                            type="text"
                            name="name"
                            autocomplete="off"
                            class=INPUT_CLASS
                            placeholder="Masukkan nama lengkap"
                            required
                            disabled=move || submitting.get()
                            prop:value=move || form.with(|state| state.draft.name.clone())
                            on:input=move |ev| {
                                vm.update_field.call((StudentField::Name, event_target_value(&ev)));
                            }
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Kelas"</label>
                        <input
                            type="text"
                            name="className"
                            autocomplete="off"
                            class=INPUT_CLASS
                            placeholder="Contoh: X IPA 1"
                            required
                            disabled=move || submitting.get()
                            prop:value=move || form.with(|state| state.draft.class_name.clone())
                            on:input=move |ev| {
                                vm.update_field.call((StudentField::ClassName, event_target_value(&ev)));
                            }
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Orang Tua"</label>
                        <select
                            name="parentId"
                            class=INPUT_CLASS
                            disabled=move || parents_disabled.get()
                            prop:value=move || form.with(|state| state.draft.parent_select_value())
                            on:change=move |ev| {
                                vm.update_field.call((StudentField::ParentId, event_target_value(&ev)));
                            }
                        >
                            <ParentOptions parents=parents />
                        </select>
                    </div>

                    <div class="flex justify-end gap-3 mt-6">
                        <button
                            type="button"
                            class="px-4 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-md hover:bg-gray-50 disabled:opacity-50"
                            disabled=move || submitting.get()
                            on:click=close
                        >
                            "Batal"
                        </button>
                        <button
                            type="submit"
                            class="flex items-center justify-center gap-2 px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 disabled:opacity-50 min-w-[100px]"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() {
                                view! {
                                    <span class="h-4 w-4 animate-spin rounded-full border-2 border-white border-t-transparent" aria-hidden="true"></span>
                                    <span>"Menyimpan..."</span>
                                }.into_view()
                            } else {
                                "Simpan".into_view()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Placeholder first; parent entries only once the list has loaded.
#[component]
fn ParentOptions(
    #[prop(into)] parents: Signal<Option<Result<Vec<ParentOption>, ApiError>>>,
) -> impl IntoView {
    view! {
        <option value="">{PARENT_PLACEHOLDER}</option>
        {move || match parents.get() {
            Some(Ok(list)) => list
                .into_iter()
                .map(|parent| view! { <option value=parent.id.to_string()>{parent.name}</option> })
                .collect_view(),
            Some(Err(_)) | None => ().into_view(),
        }}
    }
}
