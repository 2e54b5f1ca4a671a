use shared::display::WebinarRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WebinarTableProps {
    pub rows: Vec<WebinarRow>,
}

fn open_in_new_tab(link: &str) {
    match gloo::utils::window().open_with_url_and_target(link, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) => tracing::warn!("Popup blocked for meeting link {}", link),
        Err(e) => tracing::error!("Failed to open meeting link {}: {:?}", link, e),
    }
}

#[function_component(WebinarTable)]
pub fn webinar_table(props: &WebinarTableProps) -> Html {
    if props.rows.is_empty() {
        return html! { <p>{ "No webinars scheduled yet." }</p> };
    }

    html! {
        <table class="webinar-table">
            <thead>
                <tr>
                    <th>{ "Title" }</th>
                    <th>{ "Time & Date" }</th>
                    <th>{ "Description" }</th>
                    <th>{ "Link" }</th>
                </tr>
            </thead>
            <tbody>
                { for props.rows.iter().map(|row| {
                    let link = row.meet_link.clone();
                    let onclick = Callback::from(move |_: MouseEvent| open_in_new_tab(&link));

                    html! {
                        <tr key={row.id.to_string()} {onclick}>
                            <td>{ &row.title }</td>
                            <td>{ &row.schedule }</td>
                            <td>{ &row.description }</td>
                            <td>
                                <a
                                    href={row.meet_link.clone()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="underline"
                                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                                >
                                    { &row.meet_link }
                                </a>
                            </td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
