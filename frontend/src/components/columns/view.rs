//! View rendering for the column panel.
//!
//! Exactly one of the three sections exists at a time, chosen by the host
//! form's display mode; each render rebuilds the active table from scratch
//! from the latest metadata. Without metadata nothing is rendered and the
//! page keeps whatever was there before.

use common::requests::WORKSHEET_SELECTED_FIELD;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::messages::Msg;
use super::state::ColumnsPanel;
use super::table::{categorical_rows, indexed_rows, DisplayMode};

pub fn view(panel: &ColumnsPanel, ctx: &Context<ColumnsPanel>) -> Html {
    let Some(mode) = ctx.props().mode else {
        return Html::default();
    };

    html! {
        <div class="columns-panel">
            { worksheet_select(panel, ctx) }
            { header_toggle(panel, ctx) }
            {
                match &panel.info {
                    None => Html::default(),
                    Some(info) => match mode {
                        DisplayMode::Flat => flat_section(info.columns()),
                        DisplayMode::Indexed => indexed_section(info.columns()),
                        DisplayMode::Categorical => {
                            categorical_section(info.columns(), info.column_counts.as_ref())
                        }
                    },
                }
            }
        </div>
    }
}

fn worksheet_select(panel: &ColumnsPanel, ctx: &Context<ColumnsPanel>) -> Html {
    if !ctx.props().show_worksheet_select || panel.worksheets.is_empty() {
        return Html::default();
    }
    let onchange = ctx.link().callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::WorksheetSelected(select.value())
    });
    html! {
        <div id="worksheet_select">
            <label for="worksheet_name">{ "Worksheet:" }</label>
            <select id="worksheet_name" name={WORKSHEET_SELECTED_FIELD} {onchange}>
                {
                    for panel.worksheets.iter().map(|name| {
                        let selected = panel.worksheet.as_deref() == Some(name.as_str());
                        html! {
                            <option value={name.clone()} selected={selected}>{ name }</option>
                        }
                    })
                }
            </select>
        </div>
    }
}

fn header_toggle(panel: &ColumnsPanel, ctx: &Context<ColumnsPanel>) -> Html {
    if !ctx.props().show_header_toggle {
        return Html::default();
    }
    let onchange = ctx.link().callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::HeaderToggled(input.checked())
    });
    html! {
        <div class="header-toggle">
            <input
                type="checkbox"
                id="has_column_names"
                name="has_column_names"
                checked={panel.has_column_names}
                {onchange}
            />
            <label for="has_column_names">{ "File has column names" }</label>
        </div>
    }
}

/// One header row listing the column names in file order.
fn flat_section(columns: &[String]) -> Html {
    html! {
        <div id="show_columns_section">
            <table id="show_columns_table" class="table">
                <thead>
                    <tr>
                        { for columns.iter().map(|name| html! { <th scope="col">{ name }</th> }) }
                    </tr>
                </thead>
            </table>
        </div>
    }
}

/// One row per column: include checkbox plus a tag-prefix text box.
fn indexed_section(columns: &[String]) -> Html {
    let rows = indexed_rows(columns);
    html! {
        <div id="show_indices_section">
            <table id="show_indices_table" class="table">
                <thead>
                    <tr>
                        <th scope="col">{ "Include?" }</th>
                        <th scope="col">{ "Column names" }</th>
                        <th scope="col">{ "Use tag prefix:" }</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for rows.into_iter().map(|row| html! {
                            <tr class="table-active">
                                <td>
                                    <input
                                        type="checkbox"
                                        class="form-check-input"
                                        name={row.check_name.clone()}
                                        id={row.check_name.clone()}
                                    />
                                </td>
                                <td>{ &row.name }</td>
                                <td>
                                    <input
                                        type="text"
                                        class="wide_text"
                                        size="50"
                                        name={row.input_name.clone()}
                                        id={row.input_name}
                                    />
                                </td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}

/// One row per column: include checkbox, the name annotated with its
/// distinct-value count, and a categorical checkbox. A hidden field echoes
/// the column name so the server can pair it with the checkboxes.
fn categorical_section(
    columns: &[String],
    counts: Option<&std::collections::HashMap<String, u64>>,
) -> Html {
    let rows = categorical_rows(columns, counts);
    html! {
        <div id="show_events_section">
            <table id="show_events_table" class="table">
                <thead>
                    <tr>
                        <th scope="col">{ "Include?" }</th>
                        <th scope="col">{ "Column name (unique entries)" }</th>
                        <th scope="col">{ "Categorical?" }</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for rows.into_iter().map(|row| html! {
                            <tr class="table-active">
                                <td>
                                    <input
                                        type="checkbox"
                                        class="form-check-input"
                                        name={row.use_name.clone()}
                                        id={row.use_name}
                                    />
                                </td>
                                <td>{ &row.label }</td>
                                <td>
                                    <input
                                        type="checkbox"
                                        class="form-check-input"
                                        name={row.category_name.clone()}
                                        id={row.category_name}
                                    />
                                    <input
                                        type="text"
                                        hidden={true}
                                        name={row.name_field.clone()}
                                        id={row.name_field}
                                        value={row.name}
                                    />
                                </td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}
