use event_adder_parser::{Encoding, Error, LinkBuilder, Marker, Page};

const LISTING: &str = r#"<!DOCTYPE html>
<html lang="de">
<head>
    <meta charset="utf-8">
    <title>Veranstaltungen</title>
</head>
<body>
    <div class="events">
        <div class="event" data-event-container>
            <h3 class="event__title" data-event-title>Demo</h3>
            <p class="event__date" data-event-start-date="01.01.24" data-event-end-date="02.01.24">01.01. - 02.01.2024</p>
            <p class="event__time" data-event-start-time="9:00" data-event-end-time="10:00">9:00 - 10:00 Uhr</p>
            <div class="event__text" data-event-description>Party</div>
            <p class="event__place" data-event-location="Hall">Hall</p>
            <button class="event__add" data-add-event>Zum Kalender hinzufügen</button>
        </div>
        <div class="event" data-event-container>
            <h3 class="event__title" data-event-title>Q&amp;A Session</h3>
            <p data-event-start-date="03.15.24" data-event-end-date="03.15.24"></p>
            <p data-event-start-time="14:05" data-event-end-time="15:45"></p>
            <div data-event-description>Ask us anything</div>
            <button class="event__add" data-add-event>Zum Kalender hinzufügen</button>
        </div>
        <div class="event" data-event-container>
            <h3 class="event__title" data-event-title>Date unknown</h3>
            <button class="event__add" data-add-event>Zum Kalender hinzufügen</button>
        </div>
    </div>
</body>
</html>
"#;

#[test]
fn builds_link_for_every_trigger() {
    let results = Page::parse(LISTING).click_all(&LinkBuilder::new());
    assert_eq!(results.len(), 3);

    let (event, link) = &results[0];
    assert_eq!(event.title, "Demo");
    assert_eq!(
        link.as_deref(),
        Ok("https://calendar.google.com/calendar/render?action=TEMPLATE&text=Demo\
            &dates=20240101T090000/20240201T100000&details=Party&location=Hall")
    );

    let (event, link) = &results[1];
    assert_eq!(event.title, "Q&A Session");
    assert_eq!(event.location, "");
    assert_eq!(
        link.as_deref(),
        Ok("https://calendar.google.com/calendar/render?action=TEMPLATE&text=Q&A Session\
            &dates=20240315T140500/20240315T154500&details=Ask us anything&location=")
    );

    let (_, link) = &results[2];
    assert_eq!(link, &Err(Error::MissingField(Marker::StartDate)));
}

#[test]
fn percent_encoding_is_opt_in() {
    let page = Page::parse(LISTING);
    let links = LinkBuilder::new().encoding(Encoding::Percent);

    let (_, link) = page.click(1, &links).unwrap();

    assert_eq!(
        link.unwrap(),
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text=Q%26A%20Session\
         &dates=20240315T140500/20240315T154500&details=Ask%20us%20anything&location="
    );
}

#[test]
fn page_without_triggers_yields_nothing() {
    let page = Page::parse("<html><body><div data-event-container></div></body></html>");

    assert_eq!(page.triggers().count(), 0);
    assert!(page.click(0, &LinkBuilder::new()).is_none());
    assert!(page.click_all(&LinkBuilder::new()).is_empty());
}
