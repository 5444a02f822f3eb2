mod analytics_tests;
