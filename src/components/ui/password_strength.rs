//! Live strength meter and rule checklist for new-password inputs. Only the
//! derived report is rendered; the password itself never leaves the signal.

use crate::features::auth::policy::PasswordPolicy;
use leptos::prelude::*;

#[component]
pub fn PasswordStrength(password: ReadSignal<String>, policy: PasswordPolicy) -> impl IntoView {
    let report = Memo::new(move |_| password.with(|password| policy.evaluate(password)));

    view! {
        <Show when=move || password.with(|password| !password.is_empty())>
            <div class="mt-2 space-y-2">
                <div class="h-2 w-full rounded-full bg-gray-200 dark:bg-gray-700">
                    <div
                        class=move || {
                            format!(
                                "h-2 rounded-full transition-all {}",
                                report.with(|report| report.strength().bar_class()),
                            )
                        }
                        style=move || format!("width: {}%", report.with(|report| report.percent()))
                    ></div>
                </div>
                <p class="text-xs text-gray-600 dark:text-gray-300">
                    {move || report.with(|report| report.strength().label())}
                </p>
                <ul class="space-y-1 text-xs">
                    {move || {
                        report
                            .with(|report| report.checks().to_vec())
                            .into_iter()
                            .map(|(rule, passed)| {
                                let class = if passed {
                                    "text-emerald-600 dark:text-emerald-400"
                                } else {
                                    "text-gray-500 dark:text-gray-400"
                                };
                                view! {
                                    <li class=class>
                                        <span class="material-symbols-outlined mr-1 align-middle text-sm">
                                            {if passed { "check_circle" } else { "radio_button_unchecked" }}
                                        </span>
                                        {rule.description()}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </Show>
    }
}
