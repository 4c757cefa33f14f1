mod test_portfolio;
