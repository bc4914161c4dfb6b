use iced::{
    Color, Element, Font, Length, Theme, border,
    font::Weight,
    widget::{Container, column, container, container::Style, row, text},
};
use iced_widget::container::bordered_box;

pub const HEADER_GREEN: Color = Color::from_rgb(0.298, 0.686, 0.314);

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

fn header_style(_theme: &Theme) -> Style {
    Style::default().background(HEADER_GREEN)
}

fn frame_style(theme: &Theme) -> Style {
    bordered_box(theme).border(border::width(1).rounded(4))
}

/// Full-width coloured title bar
pub fn header<'a, Message: 'a>(title: &'a str) -> Element<'a, Message> {
    container(text(title).size(24).font(BOLD).color(Color::WHITE))
        .style(header_style)
        .width(Length::Fill)
        .padding(15)
        .center_x(Length::Fill)
        .into()
}

/// Bordered box with a caption, in the spirit of a toolkit label frame
pub fn labeled_frame<'a, Message: 'a>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Container<'a, Message> {
    container(column![text(title).size(16).font(BOLD), content.into()].spacing(8))
        .style(frame_style)
        .padding(10)
        .width(Length::Fill)
}

/// Header above a two-column body, left column narrower than the right
pub fn layout<'a, Message>(
    title: &'a str,
    left: impl Into<Element<'a, Message>>,
    right: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    column![
        header(title),
        row![
            container(left.into())
                .width(Length::FillPortion(1))
                .height(Length::Fill),
            container(right.into())
                .width(Length::FillPortion(1))
                .height(Length::Fill),
        ]
        .spacing(20)
        .padding(20)
        .height(Length::Fill),
    ]
    .into()
}
