// Root component: provides shared state and the notification service, and
// switches the visible tool panel.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::calculators::bmi::BmiCalculator;
use crate::components::calculators::currency_converter::CurrencyConverter;
use crate::components::calculators::date_calc::DateCalculator;
use crate::components::calculators::exercise::ExerciseCalculator;
use crate::components::calculators::finance::FinanceCalculator;
use crate::components::calculators::loan_emi::LoanEmiCalculator;
use crate::components::calculators::mortgage::MortgageCalculator;
use crate::components::calculators::percentage::PercentageCalculator;
use crate::components::calculators::scientific::ScientificCalculator;
use crate::components::calculators::standard::StandardCalculator;
use crate::components::calculators::tip::TipCalculator;
use crate::components::calculators::unit_converter::UnitConverter;
use crate::components::calculators::vedic::VedicCalculator;
use crate::components::navbar::Navbar;
use crate::components::toast::ToastStack;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::services::notifier::Notifier;
use crate::state::app_state::{AppState, Tab};

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let theme = ThemePalette::from_name(&config.app.theme);
    let history_capacity = config.history.capacity;

    let state = use_context_provider(|| Signal::new(AppState::from_config(&config)));
    use_context_provider(Notifier::new);

    let active = state.read().active_tab;

    rsx! {
        div { class: "app-root", style: "{theme.css_vars()}",
            Navbar {}
            main { class: "app-main",
                match active {
                    Tab::Standard => rsx! { StandardCalculator { history_capacity } },
                    Tab::Scientific => rsx! { ScientificCalculator { history_capacity } },
                    Tab::Units => rsx! { UnitConverter {} },
                    Tab::Currency => rsx! { CurrencyConverter {} },
                    Tab::Bmi => rsx! { BmiCalculator {} },
                    Tab::Finance => rsx! { FinanceCalculator {} },
                    Tab::Mortgage => rsx! { MortgageCalculator {} },
                    Tab::LoanEmi => rsx! { LoanEmiCalculator {} },
                    Tab::Exercise => rsx! { ExerciseCalculator {} },
                    Tab::Dates => rsx! { DateCalculator {} },
                    Tab::Tip => rsx! { TipCalculator {} },
                    Tab::Vedic => rsx! { VedicCalculator {} },
                    Tab::Percentage => rsx! { PercentageCalculator {} },
                }
            }
            ToastStack {}
        }
    }
}
