// ============================================================================
// TIMETABLE VIEW - search, day/type filters, grouped schedule
// ============================================================================

use yew::prelude::*;

use crate::components::ui::{
    Dialog, DialogDescription, DialogFooter, DialogHeader, DialogTitle, DialogClose, Select,
};
use crate::hooks::use_timetable;
use crate::models::session::Role;
use crate::models::timetable::TimetableEntry;
use crate::state::select_state::SelectOption;
use crate::viewmodels::timetable_viewmodel::{
    build_timetable, day_options, type_options, TimetableFilters, ALL_FILTER,
};

fn select_options(pairs: Vec<(String, String)>) -> Vec<SelectOption> {
    pairs
        .into_iter()
        .map(|(value, label)| SelectOption::new(value, label))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct TimetableViewProps {
    pub role: Role,
}

#[function_component(TimetableView)]
pub fn timetable_view(props: &TimetableViewProps) -> Html {
    let timetable = use_timetable(props.role);
    let query = use_state(String::new);
    let day = use_state(|| ALL_FILTER.to_string());
    let class_type = use_state(|| ALL_FILTER.to_string());
    let selected = use_state(|| None::<TimetableEntry>);

    let on_query = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };
    let on_day = {
        let day = day.clone();
        Callback::from(move |value: String| day.set(value))
    };
    let on_type = {
        let class_type = class_type.clone();
        Callback::from(move |value: String| class_type.set(value))
    };
    let on_detail_change = {
        let selected = selected.clone();
        Callback::from(move |open: bool| {
            if !open {
                selected.set(None);
            }
        })
    };
    let open_detail = |entry: TimetableEntry| {
        let selected = selected.clone();
        Callback::from(move |_e: MouseEvent| selected.set(Some(entry.clone())))
    };

    let filters = TimetableFilters::new(&query, &day, &class_type);
    let groups = build_timetable(&timetable.entries, &filters);
    let loading = *timetable.loading;

    let body = if timetable.entries.is_empty() {
        html! {
            <div class="empty-state">
                <div class="empty-icon">{"📅"}</div>
                <h3>{ if loading { "Loading timetable..." } else { "No classes scheduled" } }</h3>
                <p>{"Your weekly schedule will appear here once classes are assigned."}</p>
            </div>
        }
    } else {
        html! {
            <div class="timetable-groups">
                { for groups.iter().map(|group| html! {
                    <section key={group.class_type.as_str()} class="timetable-group">
                        <h3 class="timetable-group-title">
                            {group.class_type.as_str()}
                            <span class="badge">{group.entries.len().to_string()}</span>
                        </h3>
                        if group.entries.is_empty() {
                            <p class="timetable-group-empty">
                                {format!("No {} classes match the current filters", group.class_type.as_str().to_lowercase())}
                            </p>
                        } else {
                            <table class="timetable-table">
                                <thead>
                                    <tr>
                                        <th>{"Day"}</th>
                                        <th>{"Time"}</th>
                                        <th>{"Course"}</th>
                                        <th>{"Room"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for group.entries.iter().map(|entry| html! {
                                        <tr class="timetable-row" onclick={open_detail(entry.clone())}>
                                            <td>{entry.day.as_str()}</td>
                                            <td>{entry.time.clone()}</td>
                                            <td>{entry.course_name.clone()}</td>
                                            <td>{entry.room.clone()}</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        }
                    </section>
                }) }
            </div>
        }
    };

    let detail = (*selected).clone();

    html! {
        <div class="page timetable-page">
            <div class="page-header">
                <h2>{"Timetable"}</h2>
                <p>{"Your weekly class schedule"}</p>
            </div>

            <div class="timetable-filters">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search course, room or day..."
                    value={(*query).clone()}
                    oninput={on_query}
                />
                <Select
                    value={AttrValue::from((*day).clone())}
                    on_value_change={on_day}
                    options={select_options(day_options())}
                    placeholder="Day"
                    aria_label="Filter by day"
                />
                <Select
                    value={AttrValue::from((*class_type).clone())}
                    on_value_change={on_type}
                    options={select_options(type_options())}
                    placeholder="Type"
                    aria_label="Filter by type"
                />
            </div>

            {body}

            <Dialog open={detail.is_some()} on_open_change={on_detail_change}>
                if let Some(entry) = detail {
                    <DialogHeader>
                        <DialogTitle>{entry.course_name.clone()}</DialogTitle>
                        <DialogDescription>
                            {format!("{} · {} at {}", entry.class_type, entry.day, entry.time)}
                        </DialogDescription>
                    </DialogHeader>
                    <p class="dialog-body">{format!("Room {}", entry.room)}</p>
                    <DialogFooter>
                        <DialogClose>{"Close"}</DialogClose>
                    </DialogFooter>
                }
            </Dialog>
        </div>
    }
}
