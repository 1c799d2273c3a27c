use expense_core::layout::greeting_name;
use expense_core::stats::chart_series;
use expense_core::{
    CompanyDirectory, Dashboard, DashboardContext, FakeDataProvider, MockDataProvider, Notifier, RateTable, Role,
    Session, load_dashboard,
};
use leptos::prelude::*;
use shared::CONFIG;

use crate::api::HttpExpenseSource;
use crate::components::{CategoryChart, CompanyCards, DashboardLayout, RecentExpenses, Section, StatCards};
use crate::session::use_session;
use crate::toast::use_toasts;

/// One load cycle's result plus the directory it was built against
#[derive(Clone)]
struct DashboardData {
    dashboard: Dashboard,
    companies: CompanyDirectory,
}

async fn fetch_dashboard(session: Option<Session>) -> DashboardData {
    let companies = CompanyDirectory::builtin().unwrap_or_else(|err| {
        web_sys::console::error_1(&format!("Company directory rejected: {}", err).into());
        CompanyDirectory::default()
    });
    let rates = RateTable::builtin();

    let source = HttpExpenseSource::new(session.as_ref().map(Session::bearer));
    let ctx = DashboardContext::new(&companies, &rates).with_viewer(session.as_ref().map(|s| &s.user));

    let mut mock = CONFIG.demo.enabled.then(MockDataProvider::from_config);
    let fake = mock.as_mut().map(|m| m as &mut dyn FakeDataProvider);

    let dashboard = load_dashboard(&source, &ctx, fake).await;
    DashboardData { dashboard, companies }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <DashboardBody />
        </DashboardLayout>
    }
}

#[component]
fn DashboardBody() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let data = LocalResource::new(move || fetch_dashboard(session.session()));

    // Once per completed load
    Effect::new(move |_| {
        if let Some(result) = data.get() {
            for notice in &result.dashboard.notices {
                toasts.notify(notice);
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-gray-900">
                    {move || format!("Welcome back, {}!", greeting_name(session.user().as_ref()))}
                </h1>
                <p class="text-gray-500">{CONFIG.tagline}</p>
            </div>

            <Suspense fallback=move || view! { <div class="text-gray-500">"Loading dashboard..."</div> }>
                {move || {
                    data.get().map(|result| {
                        // Dereference SendWrapper to access the loaded data
                        let loaded: &DashboardData = &result;
                        view! {
                            <DashboardContent
                                data=loaded.clone()
                                role=session.user().map(|u| u.role)
                            />
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn DashboardContent(data: DashboardData, role: Option<Role>) -> impl IntoView {
    let DashboardData { dashboard, companies } = data;
    let is_demo = dashboard.is_demo();
    let stat_cards = dashboard.stat_cards(role);
    let rollups = dashboard.company_rollups.clone();
    let category_rows = dashboard.category_matrix.clone();
    let series = chart_series(&companies);
    let recent = dashboard.recent().to_vec();

    view! {
        {is_demo.then(|| view! {
            <div class="inline-block rounded-full bg-amber-100 px-3 py-1 text-xs font-medium text-amber-800">
                "Demo data"
            </div>
        })}

        <StatCards cards=stat_cards />

        <Section id="companies" title="Companies">
            <CompanyCards rollups=rollups />
        </Section>

        <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
            <Section id="categories" title="Expenses by Category">
                <CategoryChart rows=category_rows series=series />
            </Section>
            <Section id="recent" title="Recent Expenses">
                <RecentExpenses expenses=recent companies=companies />
            </Section>
        </div>
    }
}
