//! Time range widget rendered into its own root next to the navigation bar.

use crate::core::dashboard::TimeRange;
use crate::core::time_range::describe;
use crate::core::widget::MountedWidget;
use web_sys::Element;
use yew::AppHandle;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TimePickerWidgetProps {
    pub range: TimeRange,
}

#[function_component(TimePickerWidget)]
pub(crate) fn time_picker_widget(props: &TimePickerWidgetProps) -> Html {
    let label = describe(&props.range);
    html! {
        <div class="gf-timepicker-nav-btn" title={format!("{} to {}", props.range.from, props.range.to)}>
            <i class="fa fa-clock-o" />
            <span class="gf-timepicker-nav-label">{label}</span>
        </div>
    }
}

struct TimePickerHandle(AppHandle<TimePickerWidget>);

impl MountedWidget for TimePickerHandle {
    fn destroy(self: Box<Self>) {
        self.0.destroy();
    }
}

/// Render the widget into `host`, returning the handle that tears it down.
pub(crate) fn mount_time_picker(host: Element, range: TimeRange) -> Box<dyn MountedWidget> {
    let handle =
        yew::Renderer::<TimePickerWidget>::with_root_and_props(host, TimePickerWidgetProps { range })
            .render();
    Box::new(TimePickerHandle(handle))
}
