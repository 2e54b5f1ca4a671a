use shared::display::CourseCard;
use yew::prelude::*;

const COVER_IMAGE: &str = "https://cdn.prod.website-files.com/5a9ee6416e90d20001b20038/64f5c1c1f5723d7453a3de42_Rectangle%20(94).svg";

#[derive(Properties, PartialEq)]
pub struct CourseCardViewProps {
    pub card: CourseCard,
    pub on_select: Callback<()>,
}

#[function_component(CourseCardView)]
pub fn course_card_view(props: &CourseCardViewProps) -> Html {
    let card = &props.card;
    let on_select = props.on_select.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(()));

    html! {
        <div class="course-card" {onclick}>
            <img class="course-cover" alt="course cover" src={COVER_IMAGE} />
            <div class="course-meta">
                <div class="course-title">{ &card.title }</div>
                <div class="course-subheading">{ &card.sub_heading }</div>
            </div>
            <div class="course-pricing">
                <h5>{ card.price_label() }</h5>
                <div class="course-offer">
                    <h5>{ "60%off" }</h5>
                    <span class="text-xs">{ "Limited Time offer" }</span>
                </div>
            </div>
            <button class="btn btn-block">{ "Start" }</button>
        </div>
    }
}
