use crate::{
    api::{ApiError, StudentResponse},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::super_admin::{
        components::add_student_modal::AddStudentModal, view_model::use_management_view_model,
    },
};
use leptos::*;

/// Student roster with the entry point for adding a student.
#[component]
pub fn ManagementTable() -> impl IntoView {
    let vm = use_management_view_model();
    let students = Signal::derive(move || vm.students_resource.get());

    view! {
        <section class="bg-white shadow rounded-lg p-6 space-y-4" data-panel="manajemen">
            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-lg font-semibold text-gray-900">"Data Siswa"</h2>
                    <p class="mt-1 text-sm text-gray-600">"Daftar siswa yang terdaftar di sekolah."</p>
                </div>
                <button
                    type="button"
                    class="inline-flex items-center gap-2 px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700"
                    on:click=move |_| vm.open_modal.call(())
                >
                    <i class="fas fa-plus"></i>
                    <span>"Tambah Siswa"</span>
                </button>
            </div>

            <StudentRows students=students />

            <AddStudentModal
                is_open=vm.modal_open
                on_close=vm.close_modal
                refetch=vm.refetch
                on_notify=vm.notify
            />
        </section>
    }
}

#[component]
fn StudentRows(
    #[prop(into)] students: Signal<Option<Result<Vec<StudentResponse>, ApiError>>>,
) -> impl IntoView {
    move || match students.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
        Some(Ok(list)) if list.is_empty() => view! {
            <EmptyState title="Belum ada siswa" description="Gunakan tombol Tambah Siswa untuk mendaftarkan siswa." />
        }
        .into_view(),
        Some(Ok(list)) => view! {
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">"Nama"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">"Kelas"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">"Orang Tua"</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        {list
                            .into_iter()
                            .map(|student| {
                                let parent = student
                                    .parent
                                    .map(|parent| parent.name)
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr>
                                        <td class="px-4 py-2 text-sm text-gray-900">{student.name}</td>
                                        <td class="px-4 py-2 text-sm text-gray-700">{student.class_name}</td>
                                        <td class="px-4 py-2 text-sm text-gray-700">{parent}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_view(),
    }
}
