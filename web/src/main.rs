use console_ui::{ConsoleShell, LoginStylesPage, OrganizationPage};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Realm Console" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        LoginStyles {},
        #[route("/orgs/:org_id")]
        Organization { org_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        ConsoleShell {
            nav {
                class: "console-nav",
                Link { to: Route::LoginStyles {}, "Login styles" }
            }
            Outlet::<Route> {}
        }
    }
}

#[component]
fn LoginStyles() -> Element {
    rsx! {
        LoginStylesPage {}
    }
}

#[component]
fn Organization(org_id: String) -> Element {
    rsx! {
        OrganizationPage { org_id: org_id }
    }
}
