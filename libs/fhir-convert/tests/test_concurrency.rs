//! One convertor shared across threads

use ferrum_convert::{BaseAdvisor, VersionConvertor};
use ferrum_models::{dstu2, stu3, Enumeration, FhirVersion, VersionedResource};
use std::thread;
mod test_support;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_convertor_is_send_and_sync() {
    assert_send_sync::<VersionConvertor>();
}

#[test]
fn test_parallel_conversions_are_independent() {
    let convertor = VersionConvertor::with_advisor(BaseAdvisor::lenient());
    let colors = [
        dstu2::DeviceMetricColor::Black,
        dstu2::DeviceMetricColor::Red,
        dstu2::DeviceMetricColor::Green,
        dstu2::DeviceMetricColor::Yellow,
        dstu2::DeviceMetricColor::Blue,
        dstu2::DeviceMetricColor::Magenta,
        dstu2::DeviceMetricColor::Cyan,
        dstu2::DeviceMetricColor::White,
    ];

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = colors
            .iter()
            .map(|color| {
                let convertor = &convertor;
                scope.spawn(move || {
                    let mut metric = test_support::dstu2_device_metric();
                    metric.color = Some(Enumeration::new(*color));
                    let src = test_support::dstu2_resource(metric);
                    (0..50)
                        .map(|_| convertor.convert_resource(Some(&src), FhirVersion::Stu3))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker panicked"))
            .collect()
    });

    for (color, runs) in colors.iter().zip(results) {
        for result in runs {
            let converted = result
                .expect("conversion succeeds")
                .and_then(VersionedResource::into_stu3);
            let Some(stu3::Resource::DeviceMetric(metric)) = converted else {
                panic!("expected an STU3 DeviceMetric");
            };
            let converted_color = metric.color.and_then(|c| c.value).map(|c| c.to_string());
            assert_eq!(converted_color, Some(color.to_string()));
        }
    }
}

#[test]
fn test_batch_reports_each_failure_separately() {
    let convertor = VersionConvertor::new();
    let batch = vec![
        test_support::dstu2_resource(test_support::dstu2_device_metric()),
        test_support::dstu2_resource(test_support::dstu2_other("Basic")),
        test_support::stu3_resource(test_support::stu3_device_metric()),
    ];

    let results = convertor.convert_batch(&batch, FhirVersion::Stu3);
    assert_eq!(results.len(), 3);
    assert!(matches!(results[0], Ok(Some(_))));
    assert!(results[1].is_err());
    assert!(results[2].is_err());
}
